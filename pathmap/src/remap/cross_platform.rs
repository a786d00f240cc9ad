//! Remapping between platforms with different path conventions.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::mapping::PlatformTable;
use crate::path::{build_destination_as, normalize, ResolvedPath};
use crate::platform::Platform;
use crate::remap::prefix_text;

/// Remapper over a [`PlatformTable`].
///
/// For each input the other platforms are tried in table order, and within a
/// platform its roots in index order. The input is interpreted under the
/// candidate platform's style, so `p:/project1` is a Windows path when the
/// Windows roots are tried and a relative POSIX path when the Linux roots
/// are tried. The first root that is an ancestor of the input, and whose
/// counterpart on the destination platform is present, wins.
///
/// # Examples
///
/// ```
/// use pathmap::{CrossPlatformRemapper, Platform, PlatformTable};
///
/// let table = PlatformTable::from_named(vec![
///     ("windows", vec![Some(r"L:\".to_string()), Some(r"P:\".to_string())]),
///     ("mac", vec![Some("/Volumes/storage1".to_string()), Some("/Volumes/storage2/".to_string())]),
/// ])
/// .unwrap();
/// let remapper = CrossPlatformRemapper::new(table);
///
/// let remapped = remapper
///     .remap(&[r"L:\temp", "p:/project1/textures\\grass.tga", r"cache\Tree.abc"], Platform::Mac)
///     .unwrap();
/// assert_eq!(
///     remapped,
///     vec![
///         "/Volumes/storage1/temp",
///         "/Volumes/storage2/project1/textures/grass.tga",
///         r"cache\Tree.abc",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CrossPlatformRemapper {
    table: PlatformTable,
    resolved: Vec<(Platform, Vec<Option<ResolvedPath>>)>,
}

impl CrossPlatformRemapper {
    /// Create a remapper, resolving every root under its platform's style.
    #[must_use]
    pub fn new(table: PlatformTable) -> Self {
        let resolved = table
            .platforms()
            .map(|platform| {
                let roots = (0..table.location_count())
                    .map(|index| {
                        table
                            .root(platform, index)
                            .map(|root| ResolvedPath::resolve_as(root, platform.style()))
                    })
                    .collect();
                (platform, roots)
            })
            .collect();

        Self { table, resolved }
    }

    /// The table this remapper was built from.
    #[must_use]
    pub fn mapping(&self) -> &PlatformTable {
        &self.table
    }

    /// Remap paths to `destination`.
    ///
    /// Paths that match no root are returned exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDestination`] if `destination` is not a key of
    /// the mapping. Nothing is remapped in that case.
    pub fn remap<S: AsRef<str>>(&self, paths: &[S], destination: Platform) -> Result<Vec<String>> {
        self.check_destination(destination)?;
        Ok(paths
            .iter()
            .map(|path| self.remap_path(path.as_ref(), destination))
            .collect())
    }

    /// Like [`remap`](Self::remap) with the destination given by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] if the name is not recognized,
    /// or [`Error::UnknownDestination`] if it is not in the mapping.
    pub fn remap_named<S: AsRef<str>>(&self, paths: &[S], destination: &str) -> Result<Vec<String>> {
        self.remap(paths, destination.parse()?)
    }

    /// Remap a single path to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDestination`] if `destination` is not a key of
    /// the mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{CrossPlatformRemapper, Platform, PlatformTable};
    ///
    /// let table = PlatformTable::new(vec![
    ///     (Platform::Windows, vec![Some(r"L:\".into())]),
    ///     (Platform::Linux, vec![Some("/mnt/storage1".into())]),
    /// ])
    /// .unwrap();
    /// let remapper = CrossPlatformRemapper::new(table);
    ///
    /// assert_eq!(
    ///     remapper.remap_one("/mnt/storage3/../storage1/x.tga", Platform::Windows).unwrap(),
    ///     r"L:\x.tga"
    /// );
    /// assert!(remapper.remap_one("/x", Platform::Mac).is_err());
    /// ```
    pub fn remap_one(&self, path: &str, destination: Platform) -> Result<String> {
        self.check_destination(destination)?;
        Ok(self.remap_path(path, destination))
    }

    fn check_destination(&self, destination: Platform) -> Result<()> {
        if self.table.contains(destination) {
            Ok(())
        } else {
            Err(Error::UnknownDestination {
                platform: destination,
                mapping: self.table.to_string(),
            })
        }
    }

    fn remap_path(&self, path: &str, destination: Platform) -> String {
        let normalized = normalize(path);
        let target_style = destination.style();

        for (source, roots) in &self.resolved {
            if *source == destination {
                continue;
            }

            let input = ResolvedPath::parse(&normalized, source.style());
            for (index, root) in roots.iter().enumerate() {
                let Some(root) = root else { continue };
                let Some(target_root) = self.table.root(destination, index) else {
                    continue;
                };
                if !root.is_ancestor_of(&input) {
                    continue;
                }

                let remapped = build_destination_as(
                    &input.render(target_style),
                    &prefix_text(root, target_style),
                    target_root,
                    target_style,
                );
                debug!("remapped {path} from {source} to {destination}: {remapped}");
                return remapped;
            }
        }

        trace!("no {destination} counterpart for {path}");
        path.to_string()
    }
}
