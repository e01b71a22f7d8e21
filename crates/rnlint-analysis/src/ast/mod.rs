//! Normalized syntax tree: tagged-variant nodes in a flat arena.

pub mod tree;
pub mod types;
pub mod walk;

pub use tree::{Ast, AstBuilder};
pub use types::{Comment, DeclarationKind, JsxName, LogicalOperator, Node, NodeId, NodeKind};
pub use walk::{walk, walk_from, WalkEvent};
