//! Integration tests for remapping within one path convention.
//!
//! Each test runs a batch of paths through a [`UniformRemapper`] and checks
//! the full, order-preserving output.

mod common;

use common::{linux_roots, mac_roots, windows_roots};
use pathmap::{Error, Platform, RootTable, UniformRemapper};

const WINDOWS_INPUTS: [&str; 5] = [
    r"L:\temp",
    r"p:///////project1/textures\grass.tga",
    r"P:\project1\assets\env\Forest",
    r"cache\Tree.abc",
    r"g:\nope",
];

#[test]
fn test_remap_paths_from_windows() {
    let remapper = UniformRemapper::new(windows_roots());
    let result = remapper.remap_as(&WINDOWS_INPUTS, Platform::Windows);

    assert_eq!(
        result,
        vec![
            r"X:\temp",
            r"Z:\library\textures\grass.tga",
            r"P:\project1\assets\env\Forest",
            r"cache\Tree.abc",
            r"g:\nope",
        ]
    );
}

#[test]
fn test_remap_paths_from_windows_by_syntax() {
    let remapper = UniformRemapper::new(windows_roots());
    let explicit = remapper.remap_as(&WINDOWS_INPUTS, Platform::Windows);
    let sniffed = remapper.remap(&WINDOWS_INPUTS);
    assert_eq!(explicit, sniffed);
}

#[test]
fn test_remap_paths_from_linux() {
    let remapper = UniformRemapper::new(linux_roots());
    let result = remapper.remap_as(
        &["/mnt/storage1/temp", "/mnt3/storage1/", "cache/Tree.abc", "/mnt5/nope"],
        Platform::Linux,
    );

    assert_eq!(
        result,
        vec!["/mnt2/storage2/temp", "/mnt/storage1", "cache/Tree.abc", "/mnt5/nope"]
    );
}

#[test]
fn test_remap_paths_from_mac() {
    let remapper = UniformRemapper::new(mac_roots());
    let result = remapper.remap_as(
        &[
            "/Volumes/storage1/project2/input/20190117",
            "/Volumes/storage2/project3/shots",
            "/Volumes/storage_0/project1/shots",
        ],
        Platform::Mac,
    );

    assert_eq!(
        result,
        vec![
            "/Volumes/storage4/project2/input/20190117",
            "/Volumes/storage3/project3/shots",
            "/Volumes/storage_0/project1/shots",
        ]
    );
}

#[test]
fn test_remap_paths_with_unsupported_platform_should_fail() {
    let remapper = UniformRemapper::new(linux_roots());
    let err = remapper
        .remap_as_named(&["/mnt/storage1/temp", "/mnt3/storage1/"], "SomeDummyPlatform")
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedPlatform { ref value } if value == "SomeDummyPlatform"));
    assert_eq!(
        err.to_string(),
        "passed platform: 'SomeDummyPlatform' is not supported"
    );
}

#[test]
fn test_exact_root_equality_scenario() {
    let remapper = UniformRemapper::new(RootTable::new().with_entry(r"L:\", r"X:\"));
    assert_eq!(remapper.remap(&[r"L:\temp"]), vec![r"X:\temp"]);
}

#[test]
fn test_no_match_passthrough_scenario() {
    let remapper = UniformRemapper::new(RootTable::new().with_entry("/mnt3/", "/mnt/"));
    assert_eq!(remapper.remap(&["cache/Tree.abc"]), vec!["cache/Tree.abc"]);
}

#[test]
fn test_first_match_wins_over_longest_match() {
    let remapper = UniformRemapper::new(
        RootTable::new()
            .with_entry("/a", "/first")
            .with_entry("/a/b", "/second"),
    );
    assert_eq!(remapper.remap(&["/a/b/c"]), vec!["/first/b/c"]);
}

#[test]
fn test_root_matching_respects_segment_boundaries() {
    let remapper = UniformRemapper::new(mac_roots());
    assert_eq!(
        remapper.remap(&["/Volumes/storage10/x"]),
        vec!["/Volumes/storage10/x"]
    );
}

#[test]
fn test_parent_references_in_input_and_table() {
    let remapper = UniformRemapper::new(
        RootTable::new().with_entry("/mnt/other/../storage1", "/srv/storage1"),
    );
    assert_eq!(
        remapper.remap(&["/mnt/tmp/../storage1/shot/v001.exr"]),
        vec!["/srv/storage1/shot/v001.exr"]
    );
}

#[test]
fn test_windows_matching_ignores_case_and_separator_style() {
    let remapper = UniformRemapper::new(windows_roots());
    assert_eq!(
        remapper.remap(&["l:/Temp/Scene.ma"]),
        vec![r"X:\Temp\Scene.ma"]
    );
}

#[test]
fn test_posix_matching_is_case_sensitive() {
    let remapper = UniformRemapper::new(linux_roots());
    assert_eq!(remapper.remap(&["/MNT3/x"]), vec!["/MNT3/x"]);
}

#[test]
fn test_output_length_and_order_preserved() {
    let remapper = UniformRemapper::new(linux_roots());
    let inputs: Vec<String> = (0..50)
        .map(|i| {
            if i % 2 == 0 {
                format!("/mnt3/shot{i}")
            } else {
                format!("/elsewhere/shot{i}")
            }
        })
        .collect();

    let result = remapper.remap(&inputs);
    assert_eq!(result.len(), inputs.len());
    for (i, path) in result.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(path, &format!("/mnt/shot{i}"));
        } else {
            assert_eq!(path, &inputs[i]);
        }
    }
}
