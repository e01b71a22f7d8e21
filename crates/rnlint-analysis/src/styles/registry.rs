//! Style Registry: declared style collections of one file and their unused keys.

use serde::Serialize;

use rnlint_core::types::collections::FxHashMap;
use rnlint_core::types::span::{Location, Span};

use super::references::Reference;
use crate::ast::{Ast, NodeId, NodeKind};

/// One key inside a style collection literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDeclaration {
    pub key: String,
    /// The `Property` node in the declaring file.
    pub node: NodeId,
    pub span: Span,
    pub key_span: Span,
    pub location: Location,
}

impl StyleDeclaration {
    pub fn new(ast: &Ast, key: String, property: NodeId) -> Self {
        let span = ast.span(property);
        let key_span = match ast.kind(property) {
            NodeKind::Property { key, .. } => ast.span(*key),
            _ => span,
        };
        Self {
            key,
            node: property,
            span,
            key_span,
            location: ast.location(span.start),
        }
    }
}

/// Where a registered collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOrigin {
    /// Declared in the file being linted.
    Local,
    /// Pulled in through an import; findings are reported at this specifier.
    Imported { specifier: NodeId },
}

#[derive(Debug, Clone)]
struct CollectionEntry {
    name: String,
    origin: CollectionOrigin,
    declared: Vec<StyleDeclaration>,
    /// Indexes into `declared` not yet marked used.
    unused: Vec<usize>,
}

/// Unused keys of one collection, in declaration order.
#[derive(Debug, Clone)]
pub struct UnusedCollection<'r> {
    pub name: &'r str,
    pub origin: CollectionOrigin,
    pub declarations: Vec<&'r StyleDeclaration>,
}

#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    collections: Vec<CollectionEntry>,
    index: FxHashMap<String, usize>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, declarations: Vec<StyleDeclaration>) {
        self.register_with_origin(name, declarations, CollectionOrigin::Local);
    }

    /// Insert or replace the collection `name`; the last registration wins.
    pub fn register_with_origin(
        &mut self,
        name: &str,
        declarations: Vec<StyleDeclaration>,
        origin: CollectionOrigin,
    ) {
        let entry = CollectionEntry {
            name: name.to_string(),
            origin,
            unused: (0..declarations.len()).collect(),
            declared: declarations,
        };
        match self.index.get(name) {
            Some(&slot) => {
                tracing::debug!(collection = name, "style collection registered twice; keeping the last one");
                self.collections[slot] = entry;
            }
            None => {
                self.index.insert(name.to_string(), self.collections.len());
                self.collections.push(entry);
            }
        }
    }

    /// Drop `reference.key` from the collection's unused set. Unknown
    /// collections and keys are ignored.
    pub fn mark_used(&mut self, reference: &Reference) {
        self.mark_used_key(&reference.collection, &reference.key);
    }

    pub fn mark_used_key(&mut self, collection: &str, key: &str) {
        let Some(&slot) = self.index.get(collection) else {
            return;
        };
        let entry = &mut self.collections[slot];
        let declared = &entry.declared;
        entry.unused.retain(|&i| declared[i].key != key);
    }

    /// Remaining unused declarations per collection, in registration order.
    /// Collections with nothing left are omitted.
    pub fn unused_declarations(&self) -> Vec<UnusedCollection<'_>> {
        self.collections
            .iter()
            .filter(|c| !c.unused.is_empty())
            .map(|c| UnusedCollection {
                name: &c.name,
                origin: c.origin,
                declarations: c.unused.iter().map(|&i| &c.declared[i]).collect(),
            })
            .collect()
    }

    /// Every declaration originally registered under `name`.
    pub fn declarations(&self, name: &str) -> Option<&[StyleDeclaration]> {
        self.index.get(name).map(|&slot| self.collections[slot].declared.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(key: &str, at: u32) -> StyleDeclaration {
        StyleDeclaration {
            key: key.to_string(),
            node: NodeId(at),
            span: Span::new(at, at + 1),
            key_span: Span::new(at, at + 1),
            location: Location { line: 1, column: at + 1 },
        }
    }

    fn unused_keys(registry: &StyleRegistry) -> Vec<String> {
        registry
            .unused_declarations()
            .iter()
            .flat_map(|c| c.declarations.iter().map(move |d| format!("{}.{}", c.name, d.key)))
            .collect()
    }

    #[test]
    fn mark_used_removes_only_that_key() {
        let mut registry = StyleRegistry::new();
        registry.register("styles", vec![decl("a", 0), decl("b", 1), decl("c", 2)]);
        registry.mark_used(&Reference::new("styles", "b"));
        assert_eq!(unused_keys(&registry), vec!["styles.a", "styles.c"]);
        assert_eq!(registry.declarations("styles").map(|d| d.len()), Some(3));
    }

    #[test]
    fn unknown_references_are_ignored() {
        let mut registry = StyleRegistry::new();
        registry.register("styles", vec![decl("a", 0)]);
        registry.mark_used(&Reference::new("other", "a"));
        registry.mark_used(&Reference::new("styles", "zzz"));
        assert_eq!(unused_keys(&registry), vec!["styles.a"]);
    }

    #[test]
    fn fully_used_collections_are_omitted() {
        let mut registry = StyleRegistry::new();
        registry.register("styles", vec![decl("a", 0)]);
        registry.register("empty", vec![]);
        registry.mark_used_key("styles", "a");
        assert!(registry.unused_declarations().is_empty());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = StyleRegistry::new();
        registry.register("styles", vec![decl("a", 0)]);
        registry.register("styles", vec![decl("b", 5)]);
        assert_eq!(registry.len(), 1);
        assert_eq!(unused_keys(&registry), vec!["styles.b"]);
    }
}
