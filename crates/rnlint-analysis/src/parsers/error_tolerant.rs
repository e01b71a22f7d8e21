//! Syntax error detection on raw tree-sitter trees.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes in a tree-sitter tree.
pub fn count_errors(root: Node) -> u32 {
    let mut count = 0u32;
    collect_errors(root, &mut |_| count += 1);
    count
}

/// First ERROR or MISSING node in document order, if any.
pub fn first_error(root: Node) -> Option<Node> {
    if !root.has_error() {
        return None;
    }
    let mut found = None;
    collect_errors(root, &mut |node| {
        if found.is_none() {
            found = Some(node);
        }
    });
    found
}

/// Display name for an error node: `ERROR` or `MISSING <kind>`.
pub fn error_kind(node: &Node) -> String {
    if node.is_missing() {
        format!("MISSING {}", node.kind())
    } else {
        "ERROR".to_string()
    }
}

fn collect_errors<'t>(node: Node<'t>, on_error: &mut impl FnMut(Node<'t>)) {
    if node.is_error() || node.is_missing() {
        on_error(node);
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, on_error);
    }
}
