//! Document-order traversal.

use super::tree::Ast;
use super::types::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    /// Pre-order: the node is visited before its children.
    Enter(NodeId),
    /// Post-order: all children have been visited.
    Leave(NodeId),
}

/// Walk the subtree under `start` without recursion, so deeply nested JSX
/// cannot overflow the stack.
pub fn walk_from(ast: &Ast, start: NodeId, mut visit: impl FnMut(WalkEvent)) {
    let mut stack = vec![(start, false)];
    while let Some((id, left)) = stack.pop() {
        if left {
            visit(WalkEvent::Leave(id));
            continue;
        }
        visit(WalkEvent::Enter(id));
        stack.push((id, true));
        let children = ast.kind(id).children();
        for child in children.into_iter().rev() {
            stack.push((child, false));
        }
    }
}

pub fn walk(ast: &Ast, visit: impl FnMut(WalkEvent)) {
    walk_from(ast, ast.root(), visit);
}

/// Pre-order ids of `start` and everything below it.
pub fn descendants(ast: &Ast, start: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    walk_from(ast, start, |event| {
        if let WalkEvent::Enter(id) = event {
            out.push(id);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, NodeKind};
    use rnlint_core::types::span::Span;

    #[test]
    fn enter_is_preorder_and_leave_is_postorder() {
        let mut b = AstBuilder::new();
        let a = b.push(NodeKind::Identifier { name: "a".into() }, Span::new(0, 1));
        let c = b.push(NodeKind::Identifier { name: "c".into() }, Span::new(2, 3));
        let arr = b.push(NodeKind::ArrayExpression { elements: vec![a, c] }, Span::new(0, 3));
        let root = b.push(NodeKind::Program { body: vec![arr] }, Span::new(0, 3));
        let ast = b.finish(root, "a c", "x.js");

        let mut events = Vec::new();
        walk(&ast, |e| events.push(e));
        assert_eq!(
            events,
            vec![
                WalkEvent::Enter(root),
                WalkEvent::Enter(arr),
                WalkEvent::Enter(a),
                WalkEvent::Leave(a),
                WalkEvent::Enter(c),
                WalkEvent::Leave(c),
                WalkEvent::Leave(arr),
                WalkEvent::Leave(root),
            ]
        );
        assert_eq!(descendants(&ast, arr), vec![arr, a, c]);
    }
}
