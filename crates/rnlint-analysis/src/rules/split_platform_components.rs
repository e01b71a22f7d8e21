//! split-platform-components: iOS and Android components belong in platform files.

use regex::Regex;
use serde::Deserialize;

use rnlint_core::config::{RuleConfig, SharedSettings};
use rnlint_core::errors::ConfigError;

use super::{options, Rule, RuleContext, RuleMeta, RuleVisitor};
use crate::ast::{Ast, NodeId, NodeKind};
use crate::styles::matchers::property_key_name;
use crate::styles::ConstantTable;

pub const NAME: &str = "split-platform-components";

const DEFAULT_IOS_PATH_REGEX: &str = r"\.ios(\.test)?\.js$";
const DEFAULT_ANDROID_PATH_REGEX: &str = r"\.android(\.test)?\.js$";

const IOS_MESSAGE: &str = "IOS components should be placed in ios files";
const ANDROID_MESSAGE: &str = "Android components should be placed in android files";
const CONFLICT_MESSAGE: &str = "IOS and Android components can't be mixed";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    pub ios_path_regex: Option<String>,
    pub android_path_regex: Option<String>,
}

pub struct SplitPlatformComponents;

impl Rule for SplitPlatformComponents {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            name: NAME,
            description: "Require platform-specific components to live in platform-specific files",
            fixable: false,
            has_suggestions: false,
        }
    }

    fn create(&self, config: &RuleConfig, settings: &SharedSettings) -> Result<Box<dyn RuleVisitor>, ConfigError> {
        let options: Options = options(config, NAME)?;
        let ios_path = compile(options.ios_path_regex.as_deref(), DEFAULT_IOS_PATH_REGEX, "iosPathRegex")?;
        let android_path = compile(
            options.android_path_regex.as_deref(),
            DEFAULT_ANDROID_PATH_REGEX,
            "androidPathRegex",
        )?;
        Ok(Box::new(PlatformComponentsVisitor {
            platform_module: settings.effective_platform_module().to_string(),
            ios_path,
            android_path,
            patterns: Vec::new(),
            imports: Vec::new(),
        }))
    }
}

fn compile(pattern: Option<&str>, default: &str, option: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern.unwrap_or(default)).map_err(|e| ConfigError::ValidationFailed {
        field: format!("rules.{NAME}.{option}"),
        message: e.to_string(),
    })
}

/// A component name and the node findings are reported at.
struct Component {
    name: String,
    node: NodeId,
}

struct PlatformComponentsVisitor {
    platform_module: String,
    ios_path: Regex,
    android_path: Regex,
    /// Declarators destructuring an object pattern.
    patterns: Vec<NodeId>,
    /// Imports from the platform module.
    imports: Vec<NodeId>,
}

impl RuleVisitor for PlatformComponentsVisitor {
    fn enter(&mut self, ctx: &RuleContext<'_>, node: NodeId) {
        let ast = ctx.ast();
        match ast.kind(node) {
            NodeKind::VariableDeclarator { id, init: Some(_) }
                if matches!(ast.kind(*id), NodeKind::ObjectPattern { .. }) =>
            {
                self.patterns.push(node);
            }
            NodeKind::ImportDeclaration { source, .. } if *source == self.platform_module => {
                self.imports.push(node);
            }
            _ => {}
        }
    }

    fn finish(&mut self, ctx: &RuleContext<'_>) {
        let ast = ctx.ast();
        let locals = self.platform_locals(ast);
        let mut components = Vec::new();

        for &declarator in &self.patterns {
            let NodeKind::VariableDeclarator { id, init: Some(init) } = ast.kind(declarator) else {
                continue;
            };
            let from_platform = match ast.kind(*init) {
                NodeKind::Identifier { name } => name == "React" || locals.contains(name),
                _ => is_require_of(ast, *init, &self.platform_module),
            };
            if from_platform {
                components.extend(pattern_components(ast, *id, ctx.constants()));
            }
        }
        for &import in &self.imports {
            let NodeKind::ImportDeclaration { specifiers, .. } = ast.kind(import) else {
                continue;
            };
            for &specifier in specifiers {
                if let NodeKind::ImportSpecifier { imported, .. } = ast.kind(specifier) {
                    components.push(Component { name: imported.clone(), node: specifier });
                }
            }
        }

        let mixed = components.iter().any(|c| c.name.contains("IOS"))
            && components.iter().any(|c| c.name.contains("Android"));
        let path = ast.path();
        for component in &components {
            if component.name.contains("IOS") && !self.ios_path.is_match(path) {
                ctx.report(component.node, if mixed { CONFLICT_MESSAGE } else { IOS_MESSAGE });
            }
            if component.name.contains("Android") && !self.android_path.is_match(path) {
                ctx.report(component.node, if mixed { CONFLICT_MESSAGE } else { ANDROID_MESSAGE });
            }
        }
    }
}

impl PlatformComponentsVisitor {
    /// Local names bound to the platform module object itself.
    fn platform_locals(&self, ast: &Ast) -> Vec<String> {
        let mut locals = Vec::new();
        for &import in &self.imports {
            let NodeKind::ImportDeclaration { specifiers, .. } = ast.kind(import) else {
                continue;
            };
            for &specifier in specifiers {
                if let NodeKind::ImportDefaultSpecifier { local } | NodeKind::ImportNamespaceSpecifier { local } =
                    ast.kind(specifier)
                {
                    locals.extend(ast.identifier_name(*local).map(str::to_string));
                }
            }
        }
        for (_, node) in ast.iter() {
            if let NodeKind::VariableDeclarator { id, init: Some(init) } = &node.kind {
                if is_require_of(ast, *init, &self.platform_module) {
                    locals.extend(ast.identifier_name(*id).map(str::to_string));
                }
            }
        }
        locals
    }
}

/// `require('<module>')`.
fn is_require_of(ast: &Ast, call: NodeId, module: &str) -> bool {
    let NodeKind::CallExpression { callee, arguments } = ast.kind(call) else {
        return false;
    };
    ast.identifier_name(*callee) == Some("require")
        && matches!(arguments.as_slice(), [only] if matches!(ast.kind(*only), NodeKind::StringLiteral { value } if value == module))
}

fn pattern_components(ast: &Ast, pattern: NodeId, constants: &ConstantTable) -> Vec<Component> {
    let NodeKind::ObjectPattern { properties } = ast.kind(pattern) else {
        return Vec::new();
    };
    properties
        .iter()
        .filter_map(|&property| {
            let name = property_key_name(ast, property, constants)?;
            Some(Component { name, node: property })
        })
        .collect()
}
