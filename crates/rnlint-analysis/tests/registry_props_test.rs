//! Property tests for the style registry's set semantics.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rnlint_analysis::styles::{Reference, StyleDeclaration, StyleRegistry};
use rnlint_analysis::NodeId;
use rnlint_core::types::span::{Location, Span};

fn declarations(keys: &BTreeSet<String>) -> Vec<StyleDeclaration> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| {
            let at = i as u32 * 10;
            StyleDeclaration {
                key: key.clone(),
                node: NodeId(i as u32),
                span: Span::new(at, at + 5),
                key_span: Span::new(at, at + 1),
                location: Location { line: i as u32 + 1, column: 1 },
            }
        })
        .collect()
}

fn unused(registry: &StyleRegistry) -> BTreeSet<String> {
    registry
        .unused_declarations()
        .iter()
        .flat_map(|c| c.declarations.iter().map(|d| d.key.clone()))
        .collect()
}

proptest! {
    #[test]
    fn unused_is_declared_minus_used(
        declared in proptest::collection::btree_set("[a-z]{1,3}", 0..12),
        used in proptest::collection::vec("[a-z]{1,3}", 0..12),
    ) {
        let mut registry = StyleRegistry::new();
        registry.register("styles", declarations(&declared));
        for key in &used {
            registry.mark_used(&Reference::new("styles", key.as_str()));
        }
        let used: BTreeSet<String> = used.into_iter().collect();
        let expected: BTreeSet<String> = declared.difference(&used).cloned().collect();
        prop_assert_eq!(unused(&registry), expected);
    }

    #[test]
    fn marking_twice_changes_nothing(
        declared in proptest::collection::btree_set("[a-z]{1,3}", 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let key = pick.get(&declared.iter().cloned().collect::<Vec<_>>()).clone();
        let mut once = StyleRegistry::new();
        once.register("styles", declarations(&declared));
        once.mark_used_key("styles", &key);
        let mut twice = once.clone();
        twice.mark_used_key("styles", &key);
        prop_assert_eq!(unused(&once), unused(&twice));
        prop_assert!(!unused(&twice).contains(&key));
    }

    #[test]
    fn other_collections_are_untouched(
        declared in proptest::collection::btree_set("[a-z]{1,3}", 0..8),
        used in proptest::collection::vec("[a-z]{1,3}", 0..8),
    ) {
        let mut registry = StyleRegistry::new();
        registry.register("styles", declarations(&declared));
        for key in &used {
            registry.mark_used(&Reference::new("other", key.as_str()));
        }
        prop_assert_eq!(unused(&registry), declared);
    }
}
