//! Mapping tables consumed by the remappers.
//!
//! A [`RootTable`] pairs source roots with destination roots for remapping
//! within one convention. A [`PlatformTable`] lists, per platform, the roots
//! under which the same storage is mounted, aligned by position.
//!
//! Both tables validate their shape when built, so a remapper holding one
//! never fails on structure later.

mod platforms;
pub(crate) mod render;
mod roots;

pub use platforms::PlatformTable;
pub use roots::RootTable;
