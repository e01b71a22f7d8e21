//! Arena-backed syntax tree plus a builder for hosts that construct trees themselves.

use rnlint_core::errors::LintError;
use rnlint_core::types::span::{LineIndex, Location, Span};

use super::types::{Comment, Node, NodeId, NodeKind};

/// A normalized syntax tree for one source file.
///
/// Nodes live in a flat arena addressed by `NodeId`; every node except the root
/// has exactly one parent. Trees coming from `AstBuilder` should be checked with
/// [`Ast::validate`] before use; the linter does this itself.
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
    root: NodeId,
    source: String,
    comments: Vec<Comment>,
    line_index: LineIndex,
    path: String,
}

impl Ast {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Node by id. Ids handed out by this tree are always in range.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Source text covered by a node.
    pub fn text(&self, id: NodeId) -> &str {
        self.span(id).text(&self.source)
    }

    pub fn location(&self, offset: u32) -> Location {
        self.line_index.location(&self.source, offset)
    }

    pub fn start_location(&self, id: NodeId) -> Location {
        self.location(self.span(id).start)
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { ast: self, next: self.parent(id) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Name of an `Identifier` node.
    pub fn identifier_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Comments lying entirely inside `[start, end)`, in source order.
    pub fn comments_between(&self, start: u32, end: u32) -> impl Iterator<Item = &Comment> {
        self.comments
            .iter()
            .filter(move |c| c.span.start >= start && c.span.end <= end)
    }

    /// Check structural consistency: child ids in range, parent links matching
    /// the child lists, a parentless root, no orphans, spans inside the source.
    pub fn validate(&self) -> Result<(), LintError> {
        let source_len = self.source.len() as u32;
        if self.get(self.root).is_none() {
            return Err(LintError::MalformedTree {
                kind: "Program".to_string(),
                line: 1,
                column: 1,
                message: format!("root id {} is out of range", self.root.0),
            });
        }

        let mut claimed = vec![false; self.nodes.len()];
        for (id, node) in self.iter() {
            if node.span.start > node.span.end || node.span.end > source_len {
                return Err(self.malformed(id, format!("span {} is outside the source", node.span)));
            }
            for child in node.kind.children() {
                let Some(child_node) = self.get(child) else {
                    return Err(self.malformed(id, format!("child id {} is out of range", child.0)));
                };
                if child_node.parent != Some(id) || claimed[child.index()] {
                    return Err(self.malformed(
                        child,
                        format!("parent link does not point back to {} node", node.kind.name()),
                    ));
                }
                claimed[child.index()] = true;
            }
        }

        for (id, node) in self.iter() {
            if id == self.root {
                if node.parent.is_some() {
                    return Err(self.malformed(id, "root node has a parent".to_string()));
                }
            } else if !claimed[id.index()] {
                return Err(self.malformed(id, "node is not reachable from the root".to_string()));
            }
        }
        Ok(())
    }

    fn malformed(&self, id: NodeId, message: String) -> LintError {
        let node = self.node(id);
        let offset = node.span.start.min(self.source.len() as u32);
        let loc = self.location(offset);
        LintError::MalformedTree {
            kind: node.kind.name().to_string(),
            line: loc.line,
            column: loc.column,
            message,
        }
    }
}

pub struct Ancestors<'a> {
    ast: &'a Ast,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.ast.get(current).and_then(|n| n.parent);
        Some(current)
    }
}

/// Bottom-up tree construction: children are pushed before their parent, and
/// pushing a parent links its children back to it.
#[derive(Debug, Default)]
pub struct AstBuilder {
    nodes: Vec<Node>,
    comments: Vec<Comment>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity), comments: Vec::new() }
    }

    pub fn push(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for child in kind.children() {
            if let Some(child_node) = self.nodes.get_mut(child.index()) {
                child_node.parent = Some(id);
            }
        }
        self.nodes.push(Node { kind, span, parent: None });
        id
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.index()).map(|n| &n.kind)
    }

    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.nodes.get(id.index()).map(|n| n.span)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Seal the arena. Does not validate; see [`Ast::validate`].
    pub fn finish(mut self, root: NodeId, source: impl Into<String>, path: impl Into<String>) -> Ast {
        let source = source.into();
        self.comments.sort_by_key(|c| c.span.start);
        Ast {
            line_index: LineIndex::new(&source),
            nodes: self.nodes,
            root,
            source,
            comments: self.comments,
            path: path.into(),
        }
    }
}
