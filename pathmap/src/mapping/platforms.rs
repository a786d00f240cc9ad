//! Cross-platform root tables.

use std::fmt;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::mapping::render;
use crate::platform::Platform;

const LIST_SHAPE: &str = "should map platform names to lists of paths";

/// Aligned per-platform lists of storage roots.
///
/// Index `i` across all lists names the same physical storage as seen from
/// each platform. A `None` (or empty string) means that storage is not
/// reachable from that platform.
///
/// # Examples
///
/// ```
/// use pathmap::{Platform, PlatformTable};
///
/// let table = PlatformTable::new(vec![
///     (Platform::Windows, vec![Some(r"L:\".into()), Some(r"P:\".into())]),
///     (Platform::Linux, vec![Some("/mnt/storage1".into()), None]),
/// ])
/// .unwrap();
///
/// assert_eq!(table.root(Platform::Linux, 0), Some("/mnt/storage1"));
/// assert_eq!(table.root(Platform::Linux, 1), None);
/// assert_eq!(
///     table.to_string(),
///     r#"{windows: ["L:\\", "P:\\"], linux: ["/mnt/storage1", null]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTable {
    entries: Vec<(Platform, Vec<Option<String>>)>,
}

impl PlatformTable {
    /// Build and validate a table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMapping`] if the table is empty or names a
    /// platform twice, and [`Error::MismatchedRootLists`] if the lists differ
    /// in length.
    pub fn new(entries: Vec<(Platform, Vec<Option<String>>)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::MalformedMapping {
                mapping: render_entries(&entries),
                reason: "mapping should name at least one platform".to_string(),
            });
        }

        for (index, (platform, _)) in entries.iter().enumerate() {
            if entries[..index].iter().any(|(seen, _)| seen == platform) {
                return Err(Error::MalformedMapping {
                    mapping: render_entries(&entries),
                    reason: format!("platform '{platform}' is listed more than once"),
                });
            }
        }

        let expected = entries[0].1.len();
        if entries.iter().any(|(_, roots)| roots.len() != expected) {
            return Err(Error::MismatchedRootLists {
                mapping: render_entries(&entries),
            });
        }

        Ok(Self { entries })
    }

    /// Build a table keyed by platform names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] for an unknown name, otherwise
    /// the same errors as [`PlatformTable::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{Platform, PlatformTable};
    ///
    /// let table = PlatformTable::from_named(vec![
    ///     ("Windows", vec![Some(r"L:\".to_string())]),
    ///     ("mac", vec![Some("/Volumes/storage1".to_string())]),
    /// ])
    /// .unwrap();
    /// assert_eq!(table.platforms().collect::<Vec<_>>(), vec![Platform::Windows, Platform::Mac]);
    /// ```
    pub fn from_named<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Vec<Option<String>>)>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, roots)| -> Result<_> { Ok((name.as_ref().parse::<Platform>()?, roots)) })
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Build a table from a YAML mapping of platform names to lists whose
    /// items are strings or nulls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMapping`] for a non-string key, a value that
    /// is not a list, or an item that is neither a string nor null;
    /// [`Error::UnsupportedPlatform`] for an unknown platform name; otherwise
    /// the same errors as [`PlatformTable::new`].
    pub fn from_yaml(mapping: &Mapping) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedMapping {
            mapping: render::yaml_mapping(mapping),
            reason: reason.to_string(),
        };

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let Value::String(name) = key else {
                return Err(malformed("platform names should be strings"));
            };
            let platform: Platform = name.parse()?;

            let Value::Sequence(items) = value else {
                return Err(malformed(LIST_SHAPE));
            };
            let roots = items
                .iter()
                .map(|item| match item {
                    Value::String(root) => Ok(Some(root.clone())),
                    Value::Null => Ok(None),
                    _ => Err(malformed(LIST_SHAPE)),
                })
                .collect::<Result<Vec<_>>>()?;

            entries.push((platform, roots));
        }

        Self::new(entries)
    }

    /// The roots listed for `platform`, if the platform is in the table.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&[Option<String>]> {
        self.entries
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, roots)| roots.as_slice())
    }

    /// Whether `platform` is a key of the table.
    #[must_use]
    pub fn contains(&self, platform: Platform) -> bool {
        self.get(platform).is_some()
    }

    /// The root for `platform` at `index`, treating null and empty entries
    /// as absent.
    #[must_use]
    pub fn root(&self, platform: Platform, index: usize) -> Option<&str> {
        self.get(platform)?
            .get(index)?
            .as_deref()
            .filter(|root| !root.is_empty())
    }

    /// The platforms in insertion order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(Platform, Vec<Option<String>>)] {
        &self.entries
    }

    /// Number of storage locations (the shared list length).
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.entries.first().map_or(0, |(_, roots)| roots.len())
    }
}

fn render_entries(entries: &[(Platform, Vec<Option<String>>)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(platform, roots)| format!("{platform}: {}", render::root_list(roots)))
        .collect();
    format!("{{{}}}", items.join(", "))
}

impl fmt::Display for PlatformTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_entries(&self.entries))
    }
}
