//! Uniform root tables.

use std::fmt;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::mapping::render;
use crate::path::{resolve, PathRelationship};

/// Ordered source-root to destination-root table for uniform remapping.
///
/// Order matters: the first source root that is an ancestor of a path wins.
///
/// # Examples
///
/// ```
/// use pathmap::RootTable;
///
/// let table = RootTable::new()
///     .with_entry("/mnt/storage1/", "/mnt2/storage2/")
///     .with_entry(r"L:\temp", r"T:\");
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(
///     table.to_string(),
///     r#"{"/mnt/storage1/": "/mnt2/storage2/", "L:\\temp": "T:\\"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootTable {
    entries: Vec<(String, String)>,
}

impl RootTable {
    /// Create an empty table. An empty table remaps nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning the table.
    #[must_use]
    pub fn with_entry(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.push(source, destination);
        self
    }

    /// Append an entry.
    pub fn push(&mut self, source: impl Into<String>, destination: impl Into<String>) {
        self.entries.push((source.into(), destination.into()));
    }

    /// Build a table from a YAML mapping of strings to strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMapping`] if any key or value is not a
    /// string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::RootTable;
    ///
    /// let yaml: serde_yaml::Mapping = serde_yaml::from_str("/mnt3/: /mnt/").unwrap();
    /// let table = RootTable::from_yaml(&yaml).unwrap();
    /// assert_eq!(table.entries()[0], ("/mnt3/".to_string(), "/mnt/".to_string()));
    /// ```
    pub fn from_yaml(mapping: &Mapping) -> Result<Self> {
        let mut table = Self::new();
        for (key, value) in mapping {
            match (key, value) {
                (Value::String(source), Value::String(destination)) => {
                    table.push(source.clone(), destination.clone());
                }
                _ => {
                    return Err(Error::MalformedMapping {
                        mapping: render::yaml_mapping(mapping),
                        reason: "roots should map source paths to destination paths".to_string(),
                    })
                }
            }
        }
        Ok(table)
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Iterate over `(source, destination)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs `(earlier, later)` of entry indices where the later entry can
    /// never match because the earlier source root contains its source root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::RootTable;
    ///
    /// let table = RootTable::new()
    ///     .with_entry("/mnt", "/a")
    ///     .with_entry("/mnt/storage1", "/b");
    /// assert_eq!(table.shadowed_entries(), vec![(0, 1)]);
    /// ```
    #[must_use]
    pub fn shadowed_entries(&self) -> Vec<(usize, usize)> {
        let sources: Vec<_> = self.entries.iter().map(|(s, _)| resolve(s)).collect();
        let mut shadowed = Vec::new();

        for (later, source) in sources.iter().enumerate() {
            if let Some(earlier) = sources[..later]
                .iter()
                .position(|candidate| PathRelationship::contains(candidate, source))
            {
                shadowed.push((earlier, later));
            }
        }

        shadowed
    }
}

impl<S, D> FromIterator<(S, D)> for RootTable
where
    S: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, D)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (source, destination) in iter {
            table.push(source, destination);
        }
        table
    }
}

impl fmt::Display for RootTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .entries
            .iter()
            .map(|(s, d)| format!("{}: {}", render::quoted(s), render::quoted(d)))
            .collect();
        write!(f, "{{{}}}", items.join(", "))
    }
}
