//! Textual path normalization.
//!
//! Normalization works on strings and never consults the file system, so it
//! gives the same answer for Windows paths on a Linux host and vice versa.
//! It performs two rewrites until neither applies:
//!
//! - Collapsing runs of the same separator (`//` to `/`, `\\` to `\`). Runs
//!   mixing both separators are left alone.
//! - Removing an interior parent back-reference `<sep><segment><sep>..`.
//!   The leading separator stays unless the back-reference ends the path
//!   and does not follow the root.
//!
//! Leading `..` components are never resolved.

use crate::path::style::has_drive;

/// Whether `c` is a path separator of either style.
fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Whether `prefix` is everything before a root separator: nothing, or a
/// bare drive.
fn is_anchor(prefix: &str) -> bool {
    prefix.is_empty() || (has_drive(prefix) && prefix.chars().count() == 2)
}

/// Normalize a path string.
///
/// # Examples
///
/// ```
/// use pathmap::path::normalize::normalize;
///
/// assert_eq!(normalize("/mnt/storage3/../storage1/file.tga"), "/mnt/storage1/file.tga");
/// assert_eq!(normalize(r"G:\\\\\dir"), r"G:\dir");
/// assert_eq!(normalize("p:///project1/textures\\grass.tga"), "p:/project1/textures\\grass.tga");
/// assert_eq!(normalize("../relative/path"), "../relative/path");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut current = collapse_repeated_separators(path);
    // Each collapse strictly shortens the string, so this terminates.
    while let Some(next) = collapse_parent_reference(&current) {
        current = collapse_repeated_separators(&next);
    }
    current
}

/// Collapse runs of the same separator into one.
///
/// # Examples
///
/// ```
/// use pathmap::path::normalize::collapse_repeated_separators;
///
/// assert_eq!(collapse_repeated_separators("/a//b///c"), "/a/b/c");
/// assert_eq!(collapse_repeated_separators(r"C:\\a\\\b"), r"C:\a\b");
/// assert_eq!(collapse_repeated_separators(r"/a/\b"), r"/a/\b");
/// ```
#[must_use]
pub fn collapse_repeated_separators(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut previous = None;

    for c in path.chars() {
        if is_separator(c) && previous == Some(c) {
            continue;
        }
        result.push(c);
        previous = Some(c);
    }

    result
}

/// Remove the first interior `<sep><segment><sep>..` back-reference.
///
/// The segment must be a real component (not `.` or `..`) and the `..` must
/// be a whole component. Returns `None` when there is nothing to collapse.
///
/// # Examples
///
/// ```
/// use pathmap::path::normalize::collapse_parent_reference;
///
/// assert_eq!(collapse_parent_reference("/a/b/../c").as_deref(), Some("/a/c"));
/// assert_eq!(collapse_parent_reference("/a/..").as_deref(), Some("/"));
/// assert_eq!(collapse_parent_reference("/a/b/..").as_deref(), Some("/a"));
/// assert_eq!(collapse_parent_reference("/a/..b"), None);
/// assert_eq!(collapse_parent_reference("../a"), None);
/// ```
#[must_use]
pub fn collapse_parent_reference(path: &str) -> Option<String> {
    // Separators are ASCII, so byte offsets from char_indices are safe slice points.
    let separators: Vec<usize> = path
        .char_indices()
        .filter(|(_, c)| is_separator(*c))
        .map(|(i, _)| i)
        .collect();

    for pair in separators.windows(2) {
        let (open, close) = (pair[0], pair[1]);
        let segment = &path[open + 1..close];
        if segment.is_empty() || segment == "." || segment == ".." {
            continue;
        }

        let rest = &path[close + 1..];
        if !rest.starts_with("..") {
            continue;
        }

        let end = match rest[2..].chars().next() {
            None => path.len(),
            Some(c) if is_separator(c) => close + 1 + 3,
            Some(_) => continue,
        };

        // A trailing back-reference drops its separator unless it is the root.
        let keep = if end == path.len() && !is_anchor(&path[..open]) {
            open
        } else {
            open + 1
        };

        let mut collapsed = String::with_capacity(path.len());
        collapsed.push_str(&path[..keep]);
        collapsed.push_str(&path[end..]);
        return Some(collapsed);
    }

    None
}
