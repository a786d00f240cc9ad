//! Structured path values.
//!
//! A [`ResolvedPath`] is a path split into an anchor (optional drive plus
//! optional root) and a list of components, interpreted under one
//! [`PathStyle`]. It knows how to compare itself against other paths of the
//! same style and how to render itself back to text.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::path::normalize::normalize;
use crate::path::style::has_drive;
use crate::platform::PathStyle;

/// A path parsed under a specific style.
///
/// Equality follows the style's rules: POSIX paths compare case-sensitively,
/// Windows paths compare drive and components case-insensitively. Empty
/// components and `.` components are dropped during parsing; `..`
/// components are kept as written.
///
/// # Examples
///
/// ```
/// use pathmap::{PathStyle, ResolvedPath};
///
/// let root = ResolvedPath::parse(r"P:\project1", PathStyle::Windows);
/// let file = ResolvedPath::parse("p:/project1/textures\\grass.tga", PathStyle::Windows);
///
/// assert!(root.is_ancestor_of(&file));
/// assert_eq!(file.to_native_string(), r"p:\project1\textures\grass.tga");
/// assert_eq!(file.to_posix_string(), "p:/project1/textures/grass.tga");
/// ```
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    style: PathStyle,
    drive: String,
    root: bool,
    parts: Vec<String>,
}

impl ResolvedPath {
    /// Parse `path` under `style` without normalizing it first.
    #[must_use]
    pub fn parse(path: &str, style: PathStyle) -> Self {
        let (drive, rest) = match style {
            PathStyle::Windows if has_drive(path) => {
                let split = path
                    .char_indices()
                    .nth(2)
                    .map_or(path.len(), |(i, _)| i);
                path.split_at(split)
            }
            _ => ("", path),
        };

        let root = rest.chars().next().is_some_and(|c| style.is_separator(c));
        let parts = rest
            .split(|c| style.is_separator(c))
            .filter(|part| !part.is_empty() && *part != ".")
            .map(str::to_string)
            .collect();

        Self {
            style,
            drive: drive.to_string(),
            root,
            parts,
        }
    }

    /// Normalize `path` and parse it under `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{PathStyle, ResolvedPath};
    ///
    /// let path = ResolvedPath::resolve_as("/mnt/storage3/../storage1/x", PathStyle::Posix);
    /// assert_eq!(path.to_native_string(), "/mnt/storage1/x");
    /// ```
    #[must_use]
    pub fn resolve_as(path: &str, style: PathStyle) -> Self {
        Self::parse(&normalize(path), style)
    }

    /// The style this path was parsed under.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The drive specifier as written (`"L:"`), or an empty string.
    #[must_use]
    pub fn drive(&self) -> &str {
        &self.drive
    }

    /// Whether the path has a root separator after the drive.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.root
    }

    /// The path components below the anchor.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Whether the path is absolute under its style.
    ///
    /// Windows paths need both a drive and a root; POSIX paths need a root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        match self.style {
            PathStyle::Windows => !self.drive.is_empty() && self.root,
            PathStyle::Posix => self.root,
        }
    }

    fn component_eq(&self, a: &str, b: &str) -> bool {
        match self.style {
            PathStyle::Windows => a.to_lowercase() == b.to_lowercase(),
            PathStyle::Posix => a == b,
        }
    }

    fn same_anchor(&self, other: &Self) -> bool {
        self.style == other.style
            && self.root == other.root
            && self.component_eq(&self.drive, &other.drive)
    }

    fn truncated(&self, len: usize) -> Self {
        Self {
            style: self.style,
            drive: self.drive.clone(),
            root: self.root,
            parts: self.parts[..len].to_vec(),
        }
    }

    /// Every strict ancestor of this path, nearest first.
    ///
    /// A relative path's last ancestor is the empty path (rendered `.`); an
    /// anchored path's last ancestor is its anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{PathStyle, ResolvedPath};
    ///
    /// let path = ResolvedPath::parse("/a/b/c", PathStyle::Posix);
    /// let parents: Vec<String> = path.parents().map(|p| p.to_native_string()).collect();
    /// assert_eq!(parents, vec!["/a/b", "/a", "/"]);
    /// ```
    pub fn parents(&self) -> impl Iterator<Item = ResolvedPath> + '_ {
        (0..self.parts.len()).rev().map(move |len| self.truncated(len))
    }

    /// Whether `self` is a strict ancestor of `other`.
    ///
    /// Equivalent to `other.parents().any(|p| p == *self)` without building
    /// the intermediate paths. A path is never its own ancestor, and paths of
    /// different styles are never related.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.same_anchor(other)
            && self.parts.len() < other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|(a, b)| self.component_eq(a, b))
    }

    /// Append a relative remainder, parsed under this path's style.
    ///
    /// Any anchor on `remainder` is ignored; only its components are added.
    #[must_use]
    pub fn join(&self, remainder: &str) -> Self {
        let tail = Self::parse(remainder, self.style);
        let mut joined = self.clone();
        joined.parts.extend(tail.parts);
        joined
    }

    /// Render with the style's own separator.
    ///
    /// The empty relative path renders as `.`.
    #[must_use]
    pub fn to_native_string(&self) -> String {
        let separator = self.style.separator();
        let mut rendered = self.drive.clone();
        if self.root {
            rendered.push(separator);
        }
        rendered.push_str(&self.parts.join(&separator.to_string()));

        if rendered.is_empty() {
            ".".to_string()
        } else {
            rendered
        }
    }

    /// Render with forward slashes regardless of style.
    #[must_use]
    pub fn to_posix_string(&self) -> String {
        match self.style {
            PathStyle::Windows => self.to_native_string().replace('\\', "/"),
            PathStyle::Posix => self.to_native_string(),
        }
    }

    /// Render for a destination of the given style.
    ///
    /// POSIX destinations get forward slashes; Windows destinations get the
    /// native rendering of this path.
    #[must_use]
    pub fn render(&self, destination: PathStyle) -> String {
        match destination {
            PathStyle::Posix => self.to_posix_string(),
            PathStyle::Windows => self.to_native_string(),
        }
    }
}

impl PartialEq for ResolvedPath {
    fn eq(&self, other: &Self) -> bool {
        self.same_anchor(other)
            && self.parts.len() == other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|(a, b)| self.component_eq(a, b))
    }
}

impl Eq for ResolvedPath {}

impl Hash for ResolvedPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.root.hash(state);
        match self.style {
            PathStyle::Windows => {
                self.drive.to_lowercase().hash(state);
                for part in &self.parts {
                    part.to_lowercase().hash(state);
                }
            }
            PathStyle::Posix => {
                self.drive.hash(state);
                self.parts.hash(state);
            }
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_native_string())
    }
}
