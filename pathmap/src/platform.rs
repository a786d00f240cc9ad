//! Platform identities and path styles.
//!
//! A [`Platform`] is a table key naming an operating system; a [`PathStyle`]
//! is the textual convention its paths are written in. Linux and Mac are
//! distinct platforms because their mount layouts differ, but they share the
//! POSIX style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Textual convention of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// Drive-letter paths (`C:\dir`), either separator accepted, `\` preferred.
    Windows,
    /// Slash-rooted paths (`/mnt/dir`).
    Posix,
}

impl PathStyle {
    /// The preferred separator for this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::PathStyle;
    ///
    /// assert_eq!(PathStyle::Windows.separator(), '\\');
    /// assert_eq!(PathStyle::Posix.separator(), '/');
    /// ```
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Whether `c` separates components under this style.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Windows => c == '\\' || c == '/',
            Self::Posix => c == '/',
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

/// Operating-system identity used as a mapping-table key.
///
/// The set is closed: anything else is rejected with
/// [`Error::UnsupportedPlatform`] when parsed.
///
/// # Examples
///
/// ```
/// use pathmap::{PathStyle, Platform};
///
/// let platform: Platform = "MacOS".parse().unwrap();
/// assert_eq!(platform, Platform::Mac);
/// assert_eq!(platform.style(), PathStyle::Posix);
/// assert!("beos".parse::<Platform>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Linux.
    Linux,
    /// Apple macOS.
    Mac,
}

impl Platform {
    /// Every recognized platform.
    pub const ALL: [Platform; 3] = [Self::Windows, Self::Linux, Self::Mac];

    /// The path style used on this platform.
    #[must_use]
    pub const fn style(self) -> PathStyle {
        match self {
            Self::Windows => PathStyle::Windows,
            Self::Linux | Self::Mac => PathStyle::Posix,
        }
    }

    /// Whether this platform belongs to the POSIX family.
    #[must_use]
    pub const fn is_posix(self) -> bool {
        matches!(self.style(), PathStyle::Posix)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Mac => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "mac" | "macos" | "darwin" => Ok(Self::Mac),
            _ => Err(Error::UnsupportedPlatform {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
