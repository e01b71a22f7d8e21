//! tree-sitter concrete tree → normalized `Ast`.
//!
//! Handles the JavaScript, TypeScript and TSX grammars. Constructs without a
//! dedicated `NodeKind` become `Other` with their named children, so nothing
//! below them is lost to the rules.

use tree_sitter::Node as TsNode;

use rnlint_core::types::span::Span;

use super::text::{decode_html_entities, unescape};
use crate::ast::{Ast, AstBuilder, Comment, DeclarationKind, JsxName, LogicalOperator, NodeId, NodeKind};

pub struct Normalizer<'s> {
    source: &'s str,
    builder: AstBuilder,
}

impl<'s> Normalizer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            builder: AstBuilder::with_capacity(source.len() / 4),
        }
    }

    pub fn normalize_tree(mut self, root: TsNode, path: &str) -> Ast {
        self.collect_comments(root);
        let root_id = self.normalize(root);
        self.builder.finish(root_id, self.source, path)
    }

    fn normalize(&mut self, node: TsNode) -> NodeId {
        match node.kind() {
            "program" => {
                let body = self.normalize_named(node);
                self.push(NodeKind::Program { body }, node)
            }
            "lexical_declaration" | "variable_declaration" => self.normalize_declaration(node),
            "variable_declarator" => self.normalize_declarator(node),
            "import_statement" => self.normalize_import(node),
            "export_statement" => self.normalize_export(node),

            "identifier"
            | "property_identifier"
            | "shorthand_property_identifier"
            | "shorthand_property_identifier_pattern"
            | "private_property_identifier"
            | "statement_identifier"
            | "type_identifier"
            | "undefined" => self.identifier(node),
            "this" => self.push(NodeKind::ThisExpression, node),
            "string" => {
                let value = unescape(self.string_body(node));
                self.push(NodeKind::StringLiteral { value }, node)
            }
            "number" => {
                let raw = self.text(node).to_string();
                self.push(NodeKind::NumberLiteral { raw }, node)
            }
            "true" => self.push(NodeKind::BooleanLiteral { value: true }, node),
            "false" => self.push(NodeKind::BooleanLiteral { value: false }, node),
            "null" => self.push(NodeKind::NullLiteral, node),
            "template_string" => self.normalize_template(node),

            "object" => {
                let properties = named(node)
                    .into_iter()
                    .map(|member| self.normalize_object_member(member))
                    .collect();
                self.push(NodeKind::ObjectExpression { properties }, node)
            }
            "object_pattern" => self.normalize_pattern(node),
            "array" => {
                let elements = self.normalize_named(node);
                self.push(NodeKind::ArrayExpression { elements }, node)
            }
            "spread_element" => {
                let argument = self.normalize_first_named(node);
                self.push(NodeKind::SpreadElement { argument }, node)
            }
            "rest_pattern" => {
                let argument = match first_named(node) {
                    Some(inner) => self.normalize_pattern(inner),
                    None => self.placeholder(node),
                };
                self.push(NodeKind::RestElement { argument }, node)
            }
            "assignment_pattern" => {
                let left = match node.child_by_field_name("left") {
                    Some(left) => self.normalize_pattern(left),
                    None => self.placeholder(node),
                };
                let right = self.normalize_field(node, "right");
                self.push(NodeKind::AssignmentPattern { left, right }, node)
            }

            "member_expression" => {
                let object = self.normalize_field(node, "object");
                let property = self.normalize_field(node, "property");
                let optional = has_child_kind(node, "optional_chain");
                self.push(
                    NodeKind::MemberExpression { object, property, computed: false, optional },
                    node,
                )
            }
            "subscript_expression" => {
                let object = self.normalize_field(node, "object");
                let property = self.normalize_field(node, "index");
                let optional = has_child_kind(node, "optional_chain");
                self.push(
                    NodeKind::MemberExpression { object, property, computed: true, optional },
                    node,
                )
            }
            "call_expression" => {
                let callee = self.normalize_field(node, "function");
                let arguments = match node.child_by_field_name("arguments") {
                    Some(args) if args.kind() == "arguments" => self.normalize_named(args),
                    // tagged template
                    Some(template) => vec![self.normalize(template)],
                    None => Vec::new(),
                };
                self.push(NodeKind::CallExpression { callee, arguments }, node)
            }
            "binary_expression" => {
                let operator = node
                    .child_by_field_name("operator")
                    .map(|op| op.kind())
                    .unwrap_or_default();
                let left = self.normalize_field(node, "left");
                let right = self.normalize_field(node, "right");
                match LogicalOperator::parse_str(operator) {
                    Some(operator) => self.push(NodeKind::LogicalExpression { operator, left, right }, node),
                    None => self.push(
                        NodeKind::BinaryExpression { operator: operator.to_string(), left, right },
                        node,
                    ),
                }
            }
            "ternary_expression" => {
                let test = self.normalize_field(node, "condition");
                let consequent = self.normalize_field(node, "consequence");
                let alternate = self.normalize_field(node, "alternative");
                self.push(NodeKind::ConditionalExpression { test, consequent, alternate }, node)
            }
            "unary_expression" => {
                let operator = node
                    .child_by_field_name("operator")
                    .map(|op| self.text(op).to_string())
                    .unwrap_or_default();
                let argument = self.normalize_field(node, "argument");
                self.push(NodeKind::UnaryExpression { operator, argument }, node)
            }
            "parenthesized_expression" => {
                let inner = named(node);
                match inner.as_slice() {
                    [only] => self.normalize(*only),
                    _ => self.other(node),
                }
            }

            "jsx_element" => self.normalize_jsx_element(node),
            "jsx_self_closing_element" => {
                let opening = self.normalize_jsx_opening(node, true);
                self.push(NodeKind::JsxElement { opening, children: Vec::new() }, node)
            }
            "jsx_opening_element" => self.normalize_jsx_opening(node, false),
            "jsx_expression" => self.normalize_jsx_expression(node),
            "jsx_text" | "html_character_reference" => self.push_jsx_text(&[node]),

            _ => self.other(node),
        }
    }

    // ---- Declarations ----

    fn normalize_declaration(&mut self, node: TsNode) -> NodeId {
        let kind = if node.kind() == "variable_declaration" {
            DeclarationKind::Var
        } else {
            match node.child_by_field_name("kind").map(|k| self.text(k)) {
                Some("let") => DeclarationKind::Let,
                _ => DeclarationKind::Const,
            }
        };
        let declarators = named(node)
            .into_iter()
            .filter(|child| child.kind() == "variable_declarator")
            .map(|child| self.normalize_declarator(child))
            .collect();
        self.push(NodeKind::VariableDeclaration { kind, declarators }, node)
    }

    fn normalize_declarator(&mut self, node: TsNode) -> NodeId {
        let id = match node.child_by_field_name("name") {
            Some(name) => self.normalize_pattern(name),
            None => self.placeholder(node),
        };
        let init = node.child_by_field_name("value").map(|value| self.normalize(value));
        self.push(NodeKind::VariableDeclarator { id, init }, node)
    }

    // ---- Imports/Exports ----

    fn normalize_import(&mut self, node: TsNode) -> NodeId {
        let source = node
            .child_by_field_name("source")
            .map(|s| self.literal_name(s))
            .unwrap_or_default();
        let mut specifiers = Vec::new();
        for clause in named(node).into_iter().filter(|c| c.kind() == "import_clause") {
            for part in named(clause) {
                match part.kind() {
                    "identifier" => {
                        let local = self.identifier(part);
                        specifiers.push(self.push(NodeKind::ImportDefaultSpecifier { local }, part));
                    }
                    "namespace_import" => {
                        let local = match first_named(part) {
                            Some(ident) => self.identifier(ident),
                            None => self.placeholder(part),
                        };
                        specifiers.push(self.push(NodeKind::ImportNamespaceSpecifier { local }, part));
                    }
                    "named_imports" => {
                        for spec in named(part).into_iter().filter(|s| s.kind() == "import_specifier") {
                            specifiers.push(self.normalize_import_specifier(spec));
                        }
                    }
                    _ => {}
                }
            }
        }
        self.push(NodeKind::ImportDeclaration { source, specifiers }, node)
    }

    fn normalize_import_specifier(&mut self, node: TsNode) -> NodeId {
        let name = node.child_by_field_name("name");
        let alias = node.child_by_field_name("alias");
        let imported = name.map(|n| self.literal_name(n)).unwrap_or_default();
        let local = match alias.or(name) {
            Some(local_node) => {
                let local_name = self.literal_name(local_node);
                self.push(NodeKind::Identifier { name: local_name }, local_node)
            }
            None => self.placeholder(node),
        };
        self.push(NodeKind::ImportSpecifier { imported, local }, node)
    }

    fn normalize_export(&mut self, node: TsNode) -> NodeId {
        let is_default = has_child_kind(node, "default");
        if let Some(declaration) = node.child_by_field_name("declaration") {
            let declaration = self.normalize(declaration);
            return if is_default {
                self.push(NodeKind::ExportDefaultDeclaration { declaration }, node)
            } else {
                self.push(
                    NodeKind::ExportNamedDeclaration {
                        declaration: Some(declaration),
                        specifiers: Vec::new(),
                        source: None,
                    },
                    node,
                )
            };
        }
        if let Some(value) = node.child_by_field_name("value") {
            let declaration = self.normalize(value);
            return self.push(NodeKind::ExportDefaultDeclaration { declaration }, node);
        }

        let mut specifiers = Vec::new();
        for clause in named(node).into_iter().filter(|c| c.kind() == "export_clause") {
            for spec in named(clause).into_iter().filter(|s| s.kind() == "export_specifier") {
                let name = spec.child_by_field_name("name");
                let alias = spec.child_by_field_name("alias");
                let local = name.map(|n| self.literal_name(n)).unwrap_or_default();
                let exported = alias.or(name).map(|n| self.literal_name(n)).unwrap_or_default();
                specifiers.push(self.push(NodeKind::ExportSpecifier { local, exported }, spec));
            }
        }
        let source = node.child_by_field_name("source").map(|s| self.literal_name(s));
        self.push(
            NodeKind::ExportNamedDeclaration { declaration: None, specifiers, source },
            node,
        )
    }

    // ---- Objects/Patterns ----

    fn normalize_object_member(&mut self, node: TsNode) -> NodeId {
        match node.kind() {
            "pair" => {
                let (key, computed) = self.normalize_property_key(node);
                let value = self.normalize_field(node, "value");
                self.push(NodeKind::Property { key, value, computed, shorthand: false }, node)
            }
            "shorthand_property_identifier" => self.shorthand_property(node, None),
            _ => self.normalize(node),
        }
    }

    fn normalize_pattern(&mut self, node: TsNode) -> NodeId {
        if node.kind() != "object_pattern" {
            return self.normalize(node);
        }
        let mut properties = Vec::new();
        for member in named(node) {
            let id = match member.kind() {
                "pair_pattern" => {
                    let (key, computed) = self.normalize_property_key(member);
                    let value = match member.child_by_field_name("value") {
                        Some(value) => self.normalize_pattern(value),
                        None => self.placeholder(member),
                    };
                    self.push(NodeKind::Property { key, value, computed, shorthand: false }, member)
                }
                "shorthand_property_identifier_pattern" => self.shorthand_property(member, None),
                "object_assignment_pattern" => match member.child_by_field_name("left") {
                    Some(left) => {
                        let right = member.child_by_field_name("right");
                        self.shorthand_property(left, right.map(|r| (r, member)))
                    }
                    None => self.other(member),
                },
                _ => self.normalize(member),
            };
            properties.push(id);
        }
        self.push(NodeKind::ObjectPattern { properties }, node)
    }

    /// `{ a }` or `{ a = fallback }`: distinct key and value nodes for the one name.
    fn shorthand_property(&mut self, name: TsNode, default: Option<(TsNode, TsNode)>) -> NodeId {
        let key = self.identifier(name);
        let value = self.identifier(name);
        match default {
            Some((right, whole)) => {
                let right = self.normalize(right);
                let value = self.push(NodeKind::AssignmentPattern { left: value, right }, whole);
                self.push(NodeKind::Property { key, value, computed: false, shorthand: true }, whole)
            }
            None => self.push(NodeKind::Property { key, value, computed: false, shorthand: true }, name),
        }
    }

    fn normalize_property_key(&mut self, node: TsNode) -> (NodeId, bool) {
        match node.child_by_field_name("key") {
            Some(key) if key.kind() == "computed_property_name" => (self.normalize_first_named(key), true),
            Some(key) => (self.normalize(key), false),
            None => (self.placeholder(node), false),
        }
    }

    // ---- Templates ----

    fn normalize_template(&mut self, node: TsNode) -> NodeId {
        let substitutions: Vec<TsNode> = named(node)
            .into_iter()
            .filter(|c| c.kind() == "template_substitution")
            .collect();

        let mut quasis = Vec::with_capacity(substitutions.len() + 1);
        let mut expressions = Vec::with_capacity(substitutions.len());
        let mut cooked_from = node.start_byte() + 1;
        for substitution in &substitutions {
            quasis.push(unescape(self.slice(cooked_from, substitution.start_byte())));
            cooked_from = substitution.end_byte();
            expressions.push(self.normalize_first_named(*substitution));
        }
        let close = node.end_byte().saturating_sub(1).max(cooked_from);
        quasis.push(unescape(self.slice(cooked_from, close)));

        self.push(NodeKind::TemplateLiteral { quasis, expressions }, node)
    }

    // ---- JSX ----

    fn normalize_jsx_element(&mut self, node: TsNode) -> NodeId {
        let opening = match node.child_by_field_name("open_tag") {
            Some(open) => self.normalize_jsx_opening(open, false),
            None => self.placeholder(node),
        };
        // Adjacent text and entity nodes form one text child.
        let mut children = Vec::new();
        let mut text_run: Vec<TsNode> = Vec::new();
        for child in named(node) {
            match child.kind() {
                "jsx_opening_element" | "jsx_closing_element" => {}
                "jsx_text" | "html_character_reference" => text_run.push(child),
                _ => {
                    if !text_run.is_empty() {
                        children.push(self.push_jsx_text(&text_run));
                        text_run.clear();
                    }
                    children.push(self.normalize(child));
                }
            }
        }
        if !text_run.is_empty() {
            children.push(self.push_jsx_text(&text_run));
        }
        self.push(NodeKind::JsxElement { opening, children }, node)
    }

    /// One `JsxText` over a run of text nodes, entities decoded.
    fn push_jsx_text(&mut self, run: &[TsNode]) -> NodeId {
        let (Some(first), Some(last)) = (run.first(), run.last()) else {
            return self.builder.push(NodeKind::JsxText { value: String::new() }, Span::new(0, 0));
        };
        let (start, end) = (first.start_byte(), last.end_byte());
        let value = decode_html_entities(self.slice(start, end));
        self.builder.push(NodeKind::JsxText { value }, Span::new(start as u32, end as u32))
    }

    fn normalize_jsx_opening(&mut self, node: TsNode, self_closing: bool) -> NodeId {
        let name_node = node.child_by_field_name("name");
        let name = name_node
            .map(|n| JsxName::from_text(self.text(n)))
            .unwrap_or_default();
        let name_id = name_node.map(|n| n.id());
        let attributes = named(node)
            .into_iter()
            .filter(|c| Some(c.id()) != name_id)
            .map(|attr| match attr.kind() {
                "jsx_attribute" => self.normalize_jsx_attribute(attr),
                "jsx_expression" => self.normalize_jsx_spread_attribute(attr),
                _ => self.normalize(attr),
            })
            .collect();
        self.push(NodeKind::JsxOpeningElement { name, attributes, self_closing }, node)
    }

    fn normalize_jsx_attribute(&mut self, node: TsNode) -> NodeId {
        let parts = named(node);
        let name = parts.first().map(|n| self.text(*n).to_string()).unwrap_or_default();
        let value = parts.get(1).map(|value| match value.kind() {
            // JSX attribute strings take no escapes
            "string" => {
                let raw = self.string_body(*value).to_string();
                self.push(NodeKind::StringLiteral { value: raw }, *value)
            }
            _ => self.normalize(*value),
        });
        self.push(NodeKind::JsxAttribute { name, value }, node)
    }

    fn normalize_jsx_spread_attribute(&mut self, node: TsNode) -> NodeId {
        match first_named(node) {
            Some(spread) if spread.kind() == "spread_element" => {
                let argument = self.normalize_first_named(spread);
                self.push(NodeKind::JsxSpreadAttribute { argument }, node)
            }
            _ => self.normalize_jsx_expression(node),
        }
    }

    fn normalize_jsx_expression(&mut self, node: TsNode) -> NodeId {
        let expression = first_named(node).map(|inner| self.normalize(inner));
        self.push(NodeKind::JsxExpressionContainer { expression }, node)
    }

    // ---- Helpers ----

    fn other(&mut self, node: TsNode) -> NodeId {
        let children = self.normalize_named(node);
        self.push(NodeKind::Other { kind: node.kind().to_string(), children }, node)
    }

    /// Zero-width stand-in where a required child is absent.
    fn placeholder(&mut self, node: TsNode) -> NodeId {
        let at = node.end_byte() as u32;
        self.builder.push(
            NodeKind::Other { kind: "missing".to_string(), children: Vec::new() },
            Span::empty(at),
        )
    }

    fn identifier(&mut self, node: TsNode) -> NodeId {
        let name = self.text(node).to_string();
        self.push(NodeKind::Identifier { name }, node)
    }

    fn normalize_named(&mut self, node: TsNode) -> Vec<NodeId> {
        named(node).into_iter().map(|c| self.normalize(c)).collect()
    }

    fn normalize_first_named(&mut self, node: TsNode) -> NodeId {
        match first_named(node) {
            Some(child) => self.normalize(child),
            None => self.placeholder(node),
        }
    }

    fn normalize_field(&mut self, node: TsNode, field: &str) -> NodeId {
        match node.child_by_field_name(field) {
            Some(child) => self.normalize(child),
            None => self.placeholder(node),
        }
    }

    fn push(&mut self, kind: NodeKind, node: TsNode) -> NodeId {
        self.builder.push(kind, span_of(node))
    }

    fn text(&self, node: TsNode) -> &'s str {
        self.slice(node.start_byte(), node.end_byte())
    }

    fn slice(&self, start: usize, end: usize) -> &'s str {
        self.source.get(start..end).unwrap_or("")
    }

    /// Text between the quotes of a string node.
    fn string_body(&self, node: TsNode) -> &'s str {
        let text = self.text(node);
        if text.len() >= 2 {
            text.get(1..text.len() - 1).unwrap_or("")
        } else {
            ""
        }
    }

    /// Name of an identifier or string-literal module/export name.
    fn literal_name(&self, node: TsNode) -> String {
        if node.kind() == "string" {
            unescape(self.string_body(node))
        } else {
            self.text(node).to_string()
        }
    }

    fn collect_comments(&mut self, root: TsNode) {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if node.kind() == "comment" {
                let text = self.text(node).to_string();
                let block = text.starts_with("/*");
                self.builder.add_comment(Comment { span: span_of(node), text, block });
            }
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}

fn span_of(node: TsNode) -> Span {
    Span::new(node.start_byte() as u32, node.end_byte() as u32)
}

/// Named children without extras (comments).
fn named<'t>(node: TsNode<'t>) -> Vec<TsNode<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).filter(|c| !c.is_extra()).collect()
}

fn first_named<'t>(node: TsNode<'t>) -> Option<TsNode<'t>> {
    named(node).into_iter().next()
}

fn has_child_kind(node: TsNode, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == kind);
    found
}
