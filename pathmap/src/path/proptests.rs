//! Property-based tests for path handling.
//!
//! The normalize module has its own properties for string normalization.
//! This module focuses on parsed paths, relationships, and destination
//! construction.

use super::destination::build_destination;
use super::normalize::normalize;
use super::relationship::PathRelationship;
use super::types::ResolvedPath;
use crate::platform::PathStyle;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 0..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Z]",
        prop::collection::vec(component_strategy(), 0..6),
        prop::bool::ANY,
    )
        .prop_map(|(drive, parts, forward)| {
            let separator = if forward { "/" } else { "\\" };
            format!("{drive}:{separator}{}", parts.join(separator))
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A path's relationship with itself is always Same
    #[test]
    fn relationship_reflexive(path in posix_path_strategy()) {
        let parsed = ResolvedPath::parse(&path, PathStyle::Posix);
        prop_assert_eq!(PathRelationship::between(&parsed, &parsed), PathRelationship::Same);
    }

    // Ancestor one way is Descendant the other way
    #[test]
    fn relationship_antisymmetric(a in posix_path_strategy(), b in posix_path_strategy()) {
        let pa = ResolvedPath::parse(&a, PathStyle::Posix);
        let pb = ResolvedPath::parse(&b, PathStyle::Posix);
        let forward = PathRelationship::between(&pa, &pb);
        let backward = PathRelationship::between(&pb, &pa);

        let expected = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(backward, expected);
    }

    // is_ancestor_of agrees with membership in parents()
    #[test]
    fn ancestor_matches_parents(a in windows_path_strategy(), b in windows_path_strategy()) {
        let pa = ResolvedPath::parse(&a, PathStyle::Windows);
        let pb = ResolvedPath::parse(&b, PathStyle::Windows);
        prop_assert_eq!(pa.is_ancestor_of(&pb), pb.parents().any(|p| p == pa));
    }

    // Every parent is an ancestor
    #[test]
    fn parents_are_ancestors(path in windows_path_strategy()) {
        let parsed = ResolvedPath::parse(&path, PathStyle::Windows);
        for parent in parsed.parents() {
            prop_assert!(parent.is_ancestor_of(&parsed));
        }
    }

    // Windows comparison ignores case
    #[test]
    fn windows_case_insensitive(path in windows_path_strategy()) {
        let upper = ResolvedPath::parse(&path.to_uppercase(), PathStyle::Windows);
        let lower = ResolvedPath::parse(&path.to_lowercase(), PathStyle::Windows);
        prop_assert_eq!(upper, lower);
    }

    // Native rendering of a parsed clean path parses back to the same path
    #[test]
    fn native_rendering_reparses(path in windows_path_strategy()) {
        let parsed = ResolvedPath::parse(&path, PathStyle::Windows);
        let reparsed = ResolvedPath::parse(&parsed.to_native_string(), PathStyle::Windows);
        prop_assert_eq!(parsed, reparsed);
    }

    // Clean absolute paths are already normalized
    #[test]
    fn clean_paths_are_fixed_points(path in posix_path_strategy()) {
        prop_assert_eq!(normalize(&path), path);
    }

    // Grafting the remainder under a new root keeps every component
    #[test]
    fn destination_preserves_remainder(
        root in posix_path_strategy(),
        tail in prop::collection::vec(component_strategy(), 1..5),
        target in windows_path_strategy(),
    ) {
        let input = format!("{}/{}", root.trim_end_matches('/'), tail.join("/"));
        let built = build_destination(&input, &root, &target);
        let built = ResolvedPath::parse(&built, PathStyle::Windows);
        let target = ResolvedPath::resolve_as(&target, PathStyle::Windows);

        prop_assert!(target.is_ancestor_of(&built));
        prop_assert_eq!(built.parts().len(), target.parts().len() + tail.len());
    }
}
