//! Textual path handling for Windows and POSIX conventions.
//!
//! Nothing in this module touches the file system. Paths are strings that
//! get interpreted under a [`PathStyle`], either detected from the text or
//! chosen explicitly, so a Linux host can reason about `L:\` paths and a
//! Windows host about `/mnt` paths.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize`] collapses repeated separators and interior `..`
//! back-references. It is a fixpoint: normalizing twice changes nothing.
//!
//! ## Style detection
//!
//! [`detect_style`] treats a path that starts with a drive specifier as
//! Windows-style and everything else as POSIX-style.
//!
//! ## Resolution
//!
//! A [`ResolvedPath`] is a normalized path parsed into drive, root and
//! components. Ancestor checks and equality follow the style's rules, with
//! Windows comparisons ignoring case.
//!
//! # Examples
//!
//! ```
//! use pathmap::path::resolve;
//! use pathmap::PathRelationship;
//!
//! let root = resolve(r"P:\");
//! let file = resolve("p:///project1/textures/grass.tga");
//!
//! assert_eq!(PathRelationship::between(&root, &file), PathRelationship::Ancestor);
//! assert_eq!(file.to_native_string(), r"p:\project1\textures\grass.tga");
//! ```

pub mod destination;
pub mod normalize;
pub mod relationship;
pub mod style;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use destination::{build_destination, build_destination_as};
pub use normalize::normalize;
pub use relationship::PathRelationship;
pub use style::detect_style;
pub use types::ResolvedPath;

/// Normalize `path` and parse it under its detected style.
///
/// # Examples
///
/// ```
/// use pathmap::{resolve, PathStyle};
///
/// let path = resolve("/mnt/storage3/../storage1");
/// assert_eq!(path.style(), PathStyle::Posix);
/// assert_eq!(path.to_native_string(), "/mnt/storage1");
/// ```
#[must_use]
pub fn resolve(path: &str) -> ResolvedPath {
    ResolvedPath::resolve_as(path, detect_style(path))
}
