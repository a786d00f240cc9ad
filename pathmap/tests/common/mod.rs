//! Common fixtures for integration tests.
//!
//! The tables here mirror real studio layouts: Windows workstations mount
//! shared storage on drive letters, Linux render nodes under `/mnt`, and
//! Macs under `/Volumes`.

use pathmap::{Platform, PlatformTable, RootTable};

/// Shorthand for a present root.
#[allow(dead_code)]
pub fn root(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// Uniform table for Windows drive remapping.
#[allow(dead_code)]
pub fn windows_roots() -> RootTable {
    RootTable::new()
        .with_entry(r"L:\", r"X:\")
        .with_entry(r"P:\project1\textures", r"Z:\library\textures")
}

/// Uniform table for Linux mount remapping.
#[allow(dead_code)]
pub fn linux_roots() -> RootTable {
    RootTable::new()
        .with_entry("/mnt/storage1/", "/mnt2/storage2/")
        .with_entry("/mnt3/", "/mnt/")
}

/// Uniform table for Mac volume remapping.
#[allow(dead_code)]
pub fn mac_roots() -> RootTable {
    RootTable::new()
        .with_entry("/Volumes/storage1/", "/Volumes/storage4/")
        .with_entry("/Volumes/storage2", "/Volumes/storage3")
}

/// Two storages visible from every platform.
#[allow(dead_code)]
pub fn three_platforms() -> PlatformTable {
    PlatformTable::new(vec![
        (Platform::Windows, vec![root(r"L:\"), root(r"P:\")]),
        (Platform::Linux, vec![root("/mnt/storage1"), root("/mnt/storage2")]),
        (Platform::Mac, vec![root("/Volumes/storage1"), root("/Volumes/storage2")]),
    ])
    .unwrap()
}

/// Three storages, the second of which Macs cannot reach.
#[allow(dead_code)]
pub fn partial_mac_coverage() -> PlatformTable {
    PlatformTable::new(vec![
        (Platform::Windows, vec![root(r"L:\"), root(r"P:\"), root(r"G:\")]),
        (
            Platform::Linux,
            vec![root("/mnt/storage1"), root("/mnt/storage2"), root("/mnt/storage3")],
        ),
        (
            Platform::Mac,
            vec![root("/Volumes/storage1"), None, root("/Volumes/storage2")],
        ),
    ])
    .unwrap()
}

/// Paths typed on a mix of machines.
#[allow(dead_code)]
pub const MIXED_INPUTS: [&str; 9] = [
    r"L:\temp",
    r"p:/project1/textures\grass.tga",
    r"P:\project1\assets\env\Forest",
    r"cache\Tree.abc",
    r"g:\yes",
    "/mnt/storage2/project1/assets/prop/Box",
    "/mnt/storage2/project1/textures/wood.tga",
    "/Volumes/storage1/project2/input/20190117",
    "/Volumes/storage2/project2/shots",
];
