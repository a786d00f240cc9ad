//! Destination path construction.
//!
//! Both remappers finish the same way: cut the matched source root off the
//! front of the input, then graft the remainder onto the replacement root.

use crate::path::style::detect_style;
use crate::path::types::ResolvedPath;
use crate::platform::PathStyle;

/// Build a destination path, interpreting the replacement root by its own
/// detected style.
///
/// `matched_prefix` is removed from the front of `input` by character count,
/// separators are trimmed from both ends of what remains, and the remainder is
/// joined onto `replacement_root`.
///
/// # Examples
///
/// ```
/// use pathmap::build_destination;
///
/// assert_eq!(
///     build_destination("/mnt/storage1/project1/file.tga", "/mnt/storage1", r"L:\"),
///     r"L:\project1\file.tga"
/// );
/// assert_eq!(build_destination(r"P:\", r"P:\", "/mnt/storage2"), "/mnt/storage2");
/// ```
#[must_use]
pub fn build_destination(input: &str, matched_prefix: &str, replacement_root: &str) -> String {
    build_destination_as(
        input,
        matched_prefix,
        replacement_root,
        detect_style(replacement_root),
    )
}

/// Build a destination path with the replacement root interpreted under an
/// explicit style.
///
/// # Examples
///
/// ```
/// use pathmap::path::build_destination_as;
/// use pathmap::PathStyle;
///
/// assert_eq!(
///     build_destination_as("/a/b/c", "/a", "/z/", PathStyle::Posix),
///     "/z/b/c"
/// );
/// ```
#[must_use]
pub fn build_destination_as(
    input: &str,
    matched_prefix: &str,
    replacement_root: &str,
    style: PathStyle,
) -> String {
    let remainder = strip_prefix_chars(input, matched_prefix.chars().count());
    let remainder = remainder.trim_matches(|c| c == '/' || c == '\\');

    ResolvedPath::resolve_as(replacement_root, style)
        .join(remainder)
        .to_native_string()
}

fn strip_prefix_chars(input: &str, count: usize) -> &str {
    match input.char_indices().nth(count) {
        Some((index, _)) => &input[index..],
        None => "",
    }
}
