//! Path relationship checking.
//!
//! This module determines how two resolved paths relate in the directory
//! hierarchy, using the comparison rules of their style.

use crate::path::types::ResolvedPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathmap::{PathRelationship, PathStyle, ResolvedPath};
///
/// let parent = ResolvedPath::parse("/mnt/storage1", PathStyle::Posix);
/// let child = ResolvedPath::parse("/mnt/storage1/project", PathStyle::Posix);
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a strict ancestor of the second.
    Ancestor,

    /// The first path is a strict descendant of the second.
    Descendant,

    /// The paths are equal under their style's comparison rules.
    Same,

    /// Neither path contains the other, or the styles differ.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{PathRelationship, PathStyle, ResolvedPath};
    ///
    /// let a = ResolvedPath::parse(r"P:\", PathStyle::Windows);
    /// let b = ResolvedPath::parse("p:/project1", PathStyle::Windows);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&b, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// ```
    #[must_use]
    pub fn between(path1: &ResolvedPath, path2: &ResolvedPath) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path1.is_ancestor_of(path2) {
            Self::Ancestor
        } else if path2.is_ancestor_of(path1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &ResolvedPath, other: &ResolvedPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{PathRelationship, PathStyle, ResolvedPath};
    ///
    /// let a = ResolvedPath::parse("/a", PathStyle::Posix);
    /// let b = ResolvedPath::parse("/a/b", PathStyle::Posix);
    /// let desc = PathRelationship::Ancestor.description(&a, &b);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &ResolvedPath, path2: &ResolvedPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
