//! Node kinds of the normalized syntax tree.
//!
//! Each JavaScript/JSX construct the rules inspect has an explicit variant;
//! everything else lands in `Other` so the tree stays fully walkable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use rnlint_core::types::span::Span;

/// Index of a node inside its `Ast` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// `const`, `let` or `var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

/// `&&`, `||` or `??`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Nullish,
}

impl LogicalOperator {
    pub fn parse_str(op: &str) -> Option<Self> {
        match op {
            "&&" => Some(Self::And),
            "||" => Some(Self::Or),
            "??" => Some(Self::Nullish),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Nullish => "??",
        }
    }
}

/// A JSX tag name split into its dotted segments (`Animated.Text` → `["Animated", "Text"]`).
/// Fragments (`<>`) have no segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct JsxName {
    pub segments: Vec<String>,
}

impl JsxName {
    pub fn from_text(text: &str) -> Self {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Self::default();
        }
        Self {
            segments: compact.split('.').map(str::to_string).collect(),
        }
    }

    /// Segments joined with `.`.
    pub fn qualified(&self) -> String {
        self.segments.join(".")
    }

    /// The last segment, used as the element's short name.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_fragment(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A comment in the source, kept for fixes that move code together with its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub span: Span,
    pub text: String,
    pub block: bool,
}

/// One node: its kind, its byte span, and its parent (`None` only for the root).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    // ---- Program Structure ----
    Program { body: Vec<NodeId> },

    // ---- Declarations ----
    VariableDeclaration { kind: DeclarationKind, declarators: Vec<NodeId> },
    VariableDeclarator { id: NodeId, init: Option<NodeId> },

    // ---- Imports/Exports ----
    ImportDeclaration { source: String, specifiers: Vec<NodeId> },
    /// `import { imported as local }`; `local` is an `Identifier`.
    ImportSpecifier { imported: String, local: NodeId },
    ImportDefaultSpecifier { local: NodeId },
    ImportNamespaceSpecifier { local: NodeId },
    ExportNamedDeclaration {
        declaration: Option<NodeId>,
        specifiers: Vec<NodeId>,
        source: Option<String>,
    },
    ExportSpecifier { local: String, exported: String },
    ExportDefaultDeclaration { declaration: NodeId },

    // ---- Expressions ----
    Identifier { name: String },
    ThisExpression,
    StringLiteral { value: String },
    NumberLiteral { raw: String },
    BooleanLiteral { value: bool },
    NullLiteral,
    /// Cooked string parts; `quasis.len() == expressions.len() + 1`.
    TemplateLiteral { quasis: Vec<String>, expressions: Vec<NodeId> },
    ObjectExpression { properties: Vec<NodeId> },
    /// Object literal entry or object pattern entry. Shorthand entries get
    /// distinct key and value nodes with the same span.
    Property { key: NodeId, value: NodeId, computed: bool, shorthand: bool },
    SpreadElement { argument: NodeId },
    ArrayExpression { elements: Vec<NodeId> },
    MemberExpression { object: NodeId, property: NodeId, computed: bool, optional: bool },
    CallExpression { callee: NodeId, arguments: Vec<NodeId> },
    LogicalExpression { operator: LogicalOperator, left: NodeId, right: NodeId },
    BinaryExpression { operator: String, left: NodeId, right: NodeId },
    ConditionalExpression { test: NodeId, consequent: NodeId, alternate: NodeId },
    UnaryExpression { operator: String, argument: NodeId },

    // ---- Patterns ----
    ObjectPattern { properties: Vec<NodeId> },
    AssignmentPattern { left: NodeId, right: NodeId },
    RestElement { argument: NodeId },

    // ---- JSX ----
    JsxElement { opening: NodeId, children: Vec<NodeId> },
    JsxOpeningElement { name: JsxName, attributes: Vec<NodeId>, self_closing: bool },
    JsxAttribute { name: String, value: Option<NodeId> },
    JsxSpreadAttribute { argument: NodeId },
    JsxExpressionContainer { expression: Option<NodeId> },
    JsxText { value: String },

    // ---- Catch-all ----
    Other { kind: String, children: Vec<NodeId> },
}

impl NodeKind {
    /// Get the kind name of this node.
    pub fn name(&self) -> &str {
        match self {
            Self::Program { .. } => "Program",
            Self::VariableDeclaration { .. } => "VariableDeclaration",
            Self::VariableDeclarator { .. } => "VariableDeclarator",
            Self::ImportDeclaration { .. } => "ImportDeclaration",
            Self::ImportSpecifier { .. } => "ImportSpecifier",
            Self::ImportDefaultSpecifier { .. } => "ImportDefaultSpecifier",
            Self::ImportNamespaceSpecifier { .. } => "ImportNamespaceSpecifier",
            Self::ExportNamedDeclaration { .. } => "ExportNamedDeclaration",
            Self::ExportSpecifier { .. } => "ExportSpecifier",
            Self::ExportDefaultDeclaration { .. } => "ExportDefaultDeclaration",
            Self::Identifier { .. } => "Identifier",
            Self::ThisExpression => "ThisExpression",
            Self::StringLiteral { .. } => "StringLiteral",
            Self::NumberLiteral { .. } => "NumberLiteral",
            Self::BooleanLiteral { .. } => "BooleanLiteral",
            Self::NullLiteral => "NullLiteral",
            Self::TemplateLiteral { .. } => "TemplateLiteral",
            Self::ObjectExpression { .. } => "ObjectExpression",
            Self::Property { .. } => "Property",
            Self::SpreadElement { .. } => "SpreadElement",
            Self::ArrayExpression { .. } => "ArrayExpression",
            Self::MemberExpression { .. } => "MemberExpression",
            Self::CallExpression { .. } => "CallExpression",
            Self::LogicalExpression { .. } => "LogicalExpression",
            Self::BinaryExpression { .. } => "BinaryExpression",
            Self::ConditionalExpression { .. } => "ConditionalExpression",
            Self::UnaryExpression { .. } => "UnaryExpression",
            Self::ObjectPattern { .. } => "ObjectPattern",
            Self::AssignmentPattern { .. } => "AssignmentPattern",
            Self::RestElement { .. } => "RestElement",
            Self::JsxElement { .. } => "JSXElement",
            Self::JsxOpeningElement { .. } => "JSXOpeningElement",
            Self::JsxAttribute { .. } => "JSXAttribute",
            Self::JsxSpreadAttribute { .. } => "JSXSpreadAttribute",
            Self::JsxExpressionContainer { .. } => "JSXExpressionContainer",
            Self::JsxText { .. } => "JSXText",
            Self::Other { kind, .. } => kind,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> SmallVec<[NodeId; 4]> {
        let mut out = SmallVec::new();
        match self {
            Self::Program { body } => out.extend(body.iter().copied()),
            Self::VariableDeclaration { declarators, .. } => out.extend(declarators.iter().copied()),
            Self::VariableDeclarator { id, init } => {
                out.push(*id);
                out.extend(*init);
            }
            Self::ImportDeclaration { specifiers, .. } => out.extend(specifiers.iter().copied()),
            Self::ImportSpecifier { local, .. }
            | Self::ImportDefaultSpecifier { local }
            | Self::ImportNamespaceSpecifier { local } => out.push(*local),
            Self::ExportNamedDeclaration { declaration, specifiers, .. } => {
                out.extend(*declaration);
                out.extend(specifiers.iter().copied());
            }
            Self::ExportDefaultDeclaration { declaration } => out.push(*declaration),
            Self::TemplateLiteral { expressions, .. } => out.extend(expressions.iter().copied()),
            Self::ObjectExpression { properties } | Self::ObjectPattern { properties } => {
                out.extend(properties.iter().copied())
            }
            Self::Property { key, value, .. } => {
                out.push(*key);
                out.push(*value);
            }
            Self::SpreadElement { argument }
            | Self::RestElement { argument }
            | Self::JsxSpreadAttribute { argument }
            | Self::UnaryExpression { argument, .. } => out.push(*argument),
            Self::ArrayExpression { elements } => out.extend(elements.iter().copied()),
            Self::MemberExpression { object, property, .. } => {
                out.push(*object);
                out.push(*property);
            }
            Self::CallExpression { callee, arguments } => {
                out.push(*callee);
                out.extend(arguments.iter().copied());
            }
            Self::LogicalExpression { left, right, .. }
            | Self::BinaryExpression { left, right, .. }
            | Self::AssignmentPattern { left, right } => {
                out.push(*left);
                out.push(*right);
            }
            Self::ConditionalExpression { test, consequent, alternate } => {
                out.push(*test);
                out.push(*consequent);
                out.push(*alternate);
            }
            Self::JsxElement { opening, children } => {
                out.push(*opening);
                out.extend(children.iter().copied());
            }
            Self::JsxOpeningElement { attributes, .. } => out.extend(attributes.iter().copied()),
            Self::JsxAttribute { value, .. } => out.extend(*value),
            Self::JsxExpressionContainer { expression } => out.extend(*expression),
            Self::Other { children, .. } => out.extend(children.iter().copied()),
            Self::ExportSpecifier { .. }
            | Self::Identifier { .. }
            | Self::ThisExpression
            | Self::StringLiteral { .. }
            | Self::NumberLiteral { .. }
            | Self::BooleanLiteral { .. }
            | Self::NullLiteral
            | Self::JsxText { .. } => {}
        }
        out
    }

    /// `Literal` in the ESTree sense: string, number, boolean or null.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::StringLiteral { .. }
                | Self::NumberLiteral { .. }
                | Self::BooleanLiteral { .. }
                | Self::NullLiteral
        )
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsx_name_joins_member_segments() {
        let name = JsxName::from_text("Animated . Text");
        assert_eq!(name.qualified(), "Animated.Text");
        assert_eq!(name.last(), Some("Text"));
        assert!(JsxName::from_text("").is_fragment());
    }

    #[test]
    fn children_follow_source_order() {
        let kind = NodeKind::ConditionalExpression {
            test: NodeId(0),
            consequent: NodeId(1),
            alternate: NodeId(2),
        };
        assert_eq!(kind.children().as_slice(), &[NodeId(0), NodeId(1), NodeId(2)]);
    }
}
