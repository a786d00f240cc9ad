//! Path remapping engines.
//!
//! Two remappers share the same shape: normalize each input, find the first
//! configured root that is a strict ancestor of it, and graft the remainder
//! onto the corresponding destination root. Inputs that match nothing pass
//! through.
//!
//! - [`UniformRemapper`] works from a [`RootTable`](crate::RootTable) of
//!   source/destination pairs written in the same convention.
//! - [`CrossPlatformRemapper`] works from a
//!   [`PlatformTable`](crate::PlatformTable) and translates between Windows
//!   and POSIX conventions.
//!
//! Both are immutable once built and can be shared across threads.

mod cross_platform;
mod uniform;

pub use cross_platform::CrossPlatformRemapper;
pub use uniform::UniformRemapper;

use crate::path::ResolvedPath;
use crate::platform::PathStyle;

/// Text of `root` as it appears at the front of a path rendered the same way.
///
/// The empty relative path renders as `.` but prefixes nothing.
fn prefix_text(root: &ResolvedPath, style: PathStyle) -> String {
    if root.drive().is_empty() && !root.has_root() && root.parts().is_empty() {
        String::new()
    } else {
        root.render(style)
    }
}
