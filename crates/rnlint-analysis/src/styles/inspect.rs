//! Single-line rendering of style objects for diagnostic messages.

use std::fmt;

use super::constants::ConstantTable;
use super::matchers::{object_properties, property_key_name, property_value};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::parsers::text::number_literal_to_string;

/// A statically known property value.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectValue {
    Str(String),
    /// Already rendered the way a JS engine prints the number.
    Num(String),
    Bool(bool),
    Null,
}

impl InspectValue {
    /// Value of a literal, a signed number literal, or a ternary with a
    /// literal branch (rendered as its source text).
    pub fn from_node(ast: &Ast, id: NodeId) -> Option<Self> {
        match ast.kind(id) {
            NodeKind::StringLiteral { value } => Some(Self::Str(value.clone())),
            NodeKind::NumberLiteral { raw } => Some(Self::Num(number_literal_to_string(raw))),
            NodeKind::BooleanLiteral { value } => Some(Self::Bool(*value)),
            NodeKind::NullLiteral => Some(Self::Null),
            NodeKind::UnaryExpression { operator, argument } => {
                let NodeKind::NumberLiteral { raw } = ast.kind(*argument) else {
                    return None;
                };
                let number = number_literal_to_string(raw);
                match operator.as_str() {
                    "-" => Some(Self::Num(format!("-{number}"))),
                    "+" => Some(Self::Num(number)),
                    _ => None,
                }
            }
            NodeKind::ConditionalExpression { consequent, alternate, .. }
                if ast.kind(*consequent).is_literal() || ast.kind(*alternate).is_literal() =>
            {
                Some(Self::Str(ast.text(id).to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for InspectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(&quote(s)),
            Self::Num(n) => f.write_str(n),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Ordered key/value pairs of an inspected object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectedObject {
    pub entries: Vec<(String, InspectValue)>,
}

impl InspectedObject {
    /// Entries of `object` with statically known values. A repeated key keeps
    /// its first position and its last value.
    pub fn from_object(ast: &Ast, object: NodeId, constants: &ConstantTable) -> Self {
        Self::from_properties(ast, &object_properties(ast, object), constants)
    }

    pub fn from_properties(ast: &Ast, properties: &[NodeId], constants: &ConstantTable) -> Self {
        let mut entries: Vec<(String, InspectValue)> = Vec::new();
        for &property in properties {
            let Some(key) = property_key_name(ast, property, constants) else {
                continue;
            };
            let Some(value) = property_value(ast, property).and_then(|v| InspectValue::from_node(ast, v)) else {
                continue;
            };
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for InspectedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if is_identifier(key) {
                write!(f, "{key}: {value}")?;
            } else {
                write!(f, "{}: {value}", quote(key))?;
            }
        }
        f.write_str(" }")
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single quotes unless the text contains one; then double quotes, then
/// backticks, then escaped single quotes.
fn quote(text: &str) -> String {
    let has_single = text.contains('\'');
    let has_double = text.contains('"');
    let (delimiter, escape_single) = if !has_single {
        ('\'', false)
    } else if !has_double {
        ('"', false)
    } else if !text.contains('`') && !text.contains("${") {
        ('`', false)
    } else {
        ('\'', true)
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\'' if escape_single => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push(delimiter);
    out
}
