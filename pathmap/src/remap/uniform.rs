//! Remapping within one path convention.

use log::{debug, trace};

use crate::error::Result;
use crate::mapping::RootTable;
use crate::path::{build_destination_as, detect_style, normalize, resolve, ResolvedPath};
use crate::platform::{PathStyle, Platform};
use crate::remap::prefix_text;

/// Remapper over a [`RootTable`] whose source and destination roots share a
/// convention.
///
/// # Examples
///
/// ```
/// use pathmap::{Platform, RootTable, UniformRemapper};
///
/// let remapper = UniformRemapper::new(
///     RootTable::new()
///         .with_entry(r"L:\", r"X:\")
///         .with_entry(r"P:\project1\textures", r"Z:\library\textures"),
/// );
///
/// let remapped = remapper.remap(&[r"L:\temp", "p:///////project1/textures\\grass.tga", r"g:\nope"]);
/// assert_eq!(remapped, vec![r"X:\temp", r"Z:\library\textures\grass.tga", r"g:\nope"]);
///
/// let remapped = remapper.remap_as(&[r"cache\Tree.abc"], Platform::Windows);
/// assert_eq!(remapped, vec![r"cache\Tree.abc"]);
/// ```
#[derive(Debug, Clone)]
pub struct UniformRemapper {
    table: RootTable,
    detected: Vec<ResolvedPath>,
    windows: Vec<ResolvedPath>,
    posix: Vec<ResolvedPath>,
}

impl UniformRemapper {
    /// Create a remapper, resolving every source root up front.
    #[must_use]
    pub fn new(table: RootTable) -> Self {
        let detected = resolve_sources(&table, resolve);
        let windows = resolve_sources(&table, |s| ResolvedPath::resolve_as(s, PathStyle::Windows));
        let posix = resolve_sources(&table, |s| ResolvedPath::resolve_as(s, PathStyle::Posix));

        Self {
            table,
            detected,
            windows,
            posix,
        }
    }

    /// The table this remapper was built from.
    #[must_use]
    pub fn table(&self) -> &RootTable {
        &self.table
    }

    /// Remap paths, detecting each path's and each root's style from its
    /// text.
    ///
    /// Destination paths are rendered in the style detected from the
    /// destination root. Paths matching no root come back normalized.
    pub fn remap<S: AsRef<str>>(&self, paths: &[S]) -> Vec<String> {
        paths
            .iter()
            .map(|path| {
                let normalized = normalize(path.as_ref());
                let input = ResolvedPath::parse(&normalized, detect_style(&normalized));
                self.remap_resolved(&normalized, &input, &self.detected, None)
            })
            .collect()
    }

    /// Remap paths, interpreting inputs and roots under the style of
    /// `platform`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{Platform, RootTable, UniformRemapper};
    ///
    /// let remapper = UniformRemapper::new(
    ///     RootTable::new()
    ///         .with_entry("/mnt/storage1/", "/mnt2/storage2/")
    ///         .with_entry("/mnt3/", "/mnt/"),
    /// );
    /// let remapped = remapper.remap_as(&["/mnt3/storage1/", "cache/Tree.abc"], Platform::Linux);
    /// assert_eq!(remapped, vec!["/mnt/storage1", "cache/Tree.abc"]);
    /// ```
    pub fn remap_as<S: AsRef<str>>(&self, paths: &[S], platform: Platform) -> Vec<String> {
        let style = platform.style();
        let sources = match style {
            PathStyle::Windows => &self.windows,
            PathStyle::Posix => &self.posix,
        };

        paths
            .iter()
            .map(|path| {
                let normalized = normalize(path.as_ref());
                let input = ResolvedPath::parse(&normalized, style);
                self.remap_resolved(&normalized, &input, sources, Some(style))
            })
            .collect()
    }

    /// Like [`remap_as`](Self::remap_as) with the platform given by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`](crate::Error::UnsupportedPlatform)
    /// before remapping anything if `platform` is not recognized.
    pub fn remap_as_named<S: AsRef<str>>(&self, paths: &[S], platform: &str) -> Result<Vec<String>> {
        let platform: Platform = platform.parse()?;
        Ok(self.remap_as(paths, platform))
    }

    fn remap_resolved(
        &self,
        normalized: &str,
        input: &ResolvedPath,
        sources: &[ResolvedPath],
        explicit: Option<PathStyle>,
    ) -> String {
        let matched = sources
            .iter()
            .zip(self.table.iter())
            .find(|(source, _)| source.is_ancestor_of(input));

        let Some((source, (raw_source, destination))) = matched else {
            trace!("no root contains {normalized}");
            return normalized.to_string();
        };

        if raw_source.is_empty() {
            trace!("empty root matched relative {normalized}, keeping it");
            return normalized.to_string();
        }

        if destination.is_empty() {
            trace!("root {raw_source} has no destination, keeping {normalized}");
            return normalized.to_string();
        }

        let style = explicit.unwrap_or_else(|| detect_style(destination));
        let remapped = build_destination_as(
            &input.to_native_string(),
            &prefix_text(source, input.style()),
            destination,
            style,
        );
        debug!("remapped {normalized} to {remapped} via {raw_source}");
        remapped
    }
}

fn resolve_sources(table: &RootTable, resolve: impl Fn(&str) -> ResolvedPath) -> Vec<ResolvedPath> {
    table.iter().map(|(source, _)| resolve(source)).collect()
}
