//! Syntactic path-style detection.

use crate::platform::PathStyle;

/// Whether `path` starts with a drive specifier: one word character and `:`.
#[must_use]
pub fn has_drive(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), Some(':')) if c.is_alphanumeric() || c == '_'
    )
}

/// Detect the style a path is written in.
///
/// This is purely syntactic: a path starting with a drive specifier is
/// Windows-style, anything else is POSIX-style. It knows nothing about
/// platforms, so Linux and Mac paths both detect as POSIX.
///
/// # Examples
///
/// ```
/// use pathmap::{detect_style, PathStyle};
///
/// assert_eq!(detect_style(r"L:\temp"), PathStyle::Windows);
/// assert_eq!(detect_style("p:/project1"), PathStyle::Windows);
/// assert_eq!(detect_style("/Volumes/storage1"), PathStyle::Posix);
/// assert_eq!(detect_style(r"cache\Tree.abc"), PathStyle::Posix);
/// ```
#[must_use]
pub fn detect_style(path: &str) -> PathStyle {
    if has_drive(path) {
        PathStyle::Windows
    } else {
        PathStyle::Posix
    }
}
