//! Error types for the pathmap library.
//!
//! This module provides the error hierarchy for every operation in the
//! pathmap library, using `thiserror` for ergonomic error handling.
//!
//! Mapping errors carry a rendering of the complete rejected mapping so that
//! callers can report exactly which table was refused.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathmap error.
///
/// # Examples
///
/// ```
/// use pathmap::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/mnt/storage1".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathmap library.
///
/// Every variant is a programmer or configuration error raised before any
/// output is produced. A path that matches no root is not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A platform identifier outside the recognized set was supplied.
    #[error("passed platform: '{value}' is not supported")]
    UnsupportedPlatform {
        /// The rejected platform identifier.
        value: String,
    },

    /// The destination platform is not a key of the mapping.
    #[error("destination platform '{platform}' was not specified in input mapping: {mapping}")]
    UnknownDestination {
        /// The requested destination platform.
        platform: crate::platform::Platform,
        /// Rendering of the full mapping.
        mapping: String,
    },

    /// The per-platform root lists of a mapping differ in length.
    #[error("paths lists in mapping should have the same size. Given mapping: {mapping}")]
    MismatchedRootLists {
        /// Rendering of the full mapping.
        mapping: String,
    },

    /// A mapping does not have the expected shape.
    #[error("incorrect format of input mapping: '{mapping}'. {reason}")]
    MalformedMapping {
        /// Rendering of the full mapping.
        mapping: String,
        /// What is wrong with the mapping.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided (configuration files only).
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}

impl Error {
    /// Check if the error was caused by a malformed mapping table.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::Error;
    ///
    /// let err = Error::MismatchedRootLists { mapping: "{}".to_string() };
    /// assert!(err.is_mapping_error());
    /// ```
    #[must_use]
    pub fn is_mapping_error(&self) -> bool {
        matches!(
            self,
            Self::MismatchedRootLists { .. } | Self::MalformedMapping { .. }
        )
    }

    /// Check if the error concerns a platform identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::Error;
    ///
    /// let err = Error::UnsupportedPlatform { value: "beos".to_string() };
    /// assert!(err.is_platform_error());
    /// ```
    #[must_use]
    pub fn is_platform_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform { .. } | Self::UnknownDestination { .. }
        )
    }
}
