//! Tests for the rules that inspect style values: no-inline-styles,
//! no-color-literals and no-single-element-style-arrays.

mod common;

use common::{lines, lint, lint_with, messages, rule_config};
use rnlint_analysis::{apply_edits, Linter};
use rnlint_core::config::{LintConfig, RuleConfig, RuleLevel};

fn component(style: &str) -> String {
    lines(&[
        "const Hello = React.createClass({",
        "  render: function() {",
        &format!("    return <Text style={{{style}}}>"),
        "      Hello {this.props.name}",
        "     </Text>;",
        "  }",
        "});",
    ])
}

// no-inline-styles

#[test]
fn inline_style_objects_are_reported_with_their_literal_entries() {
    let cases = [
        ("{backgroundColor: '#FFFFFF', opacity: 0.5}", "Inline style: { backgroundColor: '#FFFFFF', opacity: 0.5 }"),
        ("{backgroundColor: '#FFFFFF', opacity: this.state.opacity}", "Inline style: { backgroundColor: '#FFFFFF' }"),
        ("{opacity: this.state.opacity, height: 12}", "Inline style: { height: 12 }"),
        ("{marginLeft: -7, height: +12}", "Inline style: { marginLeft: -7, height: 12 }"),
        ("[styles.text, {backgroundColor: '#FFFFFF'}]", "Inline style: { backgroundColor: '#FFFFFF' }"),
        ("[styles.text, someBoolean && {backgroundColor: '#FFFFFF'}]", "Inline style: { backgroundColor: '#FFFFFF' }"),
        (
            "[style1, {backgroundColor: someBoolean ? '#fff' : '#000'}]",
            "Inline style: { backgroundColor: \"someBoolean ? '#fff' : '#000'\" }",
        ),
    ];
    for (style, expected) in cases {
        assert_eq!(messages(&lint("no-inline-styles", &component(style))), vec![expected], "style {style}");
    }
}

#[test]
fn dynamic_inline_objects_are_allowed() {
    for style in [
        "{marginLeft: -exampleVar, height: +examplevar}",
        "[style1, {color: someBoolean ? trueColor : falseColor}]",
        "this.props.isDanger ? styles.style1 : styles.style2",
    ] {
        assert!(lint("no-inline-styles", &component(style)).is_empty(), "style {style}");
    }
}

#[test]
fn small_inline_objects_can_be_allowed() {
    let config = rule_config(&[("allowStylePropertiesLessThan", toml::Value::Integer(2))]);
    let small = lint_with("no-inline-styles", config.clone(), "A.js", &component("{height: 12}"));
    assert!(small.is_empty());
    let large = lint_with("no-inline-styles", config, "A.js", &component("{height: 12, width: 4}"));
    assert_eq!(large.len(), 1);
}

#[test]
fn collection_values_are_not_inline_styles() {
    let source = lines(&[
        "const styles = StyleSheet.create({ box: {backgroundColor: '#FFFFFF', opacity: 0.5} });",
        "const App = () => <View style={styles.box} />;",
    ]);
    let config = LintConfig::all(["no-inline-styles", "no-unused-styles", "no-color-literals"]);
    let diagnostics = Linter::new(config).unwrap().lint_source("App.js", &source).unwrap();
    assert_eq!(messages(&diagnostics), vec!["Color literal: { backgroundColor: '#FFFFFF' }"]);
    assert_eq!(diagnostics[0].rule, "no-color-literals");
}

#[test]
fn the_same_object_inline_is_reported() {
    let source = "const App = () => <View style={{backgroundColor: '#FFFFFF', opacity: 0.5}} />;";
    let config = LintConfig::all(["no-inline-styles"]);
    let diagnostics = Linter::new(config).unwrap().lint_source("App.js", source).unwrap();
    assert_eq!(messages(&diagnostics), vec!["Inline style: { backgroundColor: '#FFFFFF', opacity: 0.5 }"]);
    assert!(diagnostics[0].fix.is_none());
    assert_eq!(diagnostics[0].suggestions.len(), 1);
}

#[test]
fn hoisting_suggestion_creates_a_style_sheet() {
    let source = "import { StyleSheet } from 'react-native';\nconst App = () => <View style={{ flex: 1 }} />;";
    let diagnostics = lint("no-inline-styles", source);
    let suggestion = &diagnostics[0].suggestions[0];
    let fixed = apply_edits(source, &suggestion.edits).unwrap();
    assert_eq!(
        fixed,
        "import { StyleSheet } from 'react-native';\nconst App = () => <View style={styles.viewStyle} />;\n\nconst styles = StyleSheet.create({\n  viewStyle: { flex: 1 },\n});"
    );
}

#[test]
fn hoisting_is_not_offered_for_dynamic_values() {
    let diagnostics = lint("no-inline-styles", &component("{opacity: this.state.opacity, height: 12}"));
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].suggestions.is_empty());
}

// no-color-literals

#[test]
fn color_literals_in_attributes_are_reported() {
    let cases = [
        "{backgroundColor: '#FFFFFF', opacity: 0.5}",
        "{backgroundColor: '#FFFFFF', opacity: this.state.opacity}",
        "[styles.text, {backgroundColor: '#FFFFFF'}]",
        "[styles.text, someBoolean && {backgroundColor: '#FFFFFF'}]",
    ];
    for style in cases {
        assert_eq!(
            messages(&lint("no-color-literals", &component(style))),
            vec!["Color literal: { backgroundColor: '#FFFFFF' }"],
            "style {style}"
        );
    }
}

#[test]
fn color_literals_in_collections_are_reported_even_when_unused() {
    let source = lines(&[
        "const styles = StyleSheet.create({",
        "    style1: {",
        "        color: 'red',",
        "    },",
        "    style2: {",
        "        borderBottomColor: 'blue',",
        "    }",
        "});",
        "export default class MyComponent extends Component {",
        "    render() {",
        "        return <View ",
        "           style={[style1, ",
        "                   this.state.isDanger && styles.style1, ",
        "                   {backgroundColor: someBoolean ? '#fff' : '#000'}]} ",
        "                />;",
        "    }",
        "}",
    ]);
    assert_eq!(
        messages(&lint("no-color-literals", &source)),
        vec![
            "Color literal: { color: 'red' }",
            "Color literal: { borderBottomColor: 'blue' }",
            "Color literal: { backgroundColor: \"someBoolean ? '#fff' : '#000'\" }",
        ]
    );
}

#[test]
fn color_variables_are_allowed() {
    let source = lines(&[
        "const $red = 'red'",
        "const $blue = 'blue'",
        "const styles = StyleSheet.create({",
        "    style1: {",
        "        color: $red,",
        "    },",
        "    style2: {",
        "        color: $blue,",
        "    }",
        "});",
        "export default class MyComponent extends Component {",
        "    render() {",
        "        const trueColor = '#fff';",
        "        const falseColor = '#000' ",
        "        return <View ",
        "           style={[styles.style1, ",
        "                   this.state.isDanger && {color: falseColor}, ",
        "                   {color: someBoolean ? trueColor : falseColor }]} ",
        "                />;",
        "    }",
        "}",
    ]);
    assert!(lint("no-color-literals", &source).is_empty());
}

#[test]
fn only_color_keys_are_listed() {
    let source = lines(&[
        "const styles = StyleSheet.create({",
        "  text: {fontColor: '#000'}",
        "})",
        "const Hello = () => <Text style={{opacity: this.state.opacity, height: 12, fontColor: styles.text}}>hi</Text>;",
    ]);
    assert_eq!(messages(&lint("no-color-literals", &source)), vec!["Color literal: { fontColor: '#000' }"]);
}

#[test]
fn configured_factory_names_are_recognized() {
    let mut config = LintConfig::all(["no-color-literals"]);
    config.settings.style_sheet_object_names = Some(vec!["EStyleSheet".to_string()]);
    let source = "const styles = EStyleSheet.create({ a: { color: 'red' } });";
    let diagnostics = Linter::new(config).unwrap().lint_source("A.js", source).unwrap();
    assert_eq!(messages(&diagnostics), vec!["Color literal: { color: 'red' }"]);
    assert!(lint("no-color-literals", source).is_empty());
}

// no-single-element-style-arrays

const UNNECESSARY_ARRAY: &str = "Single element style arrays are not necessary and cause unnecessary re-renders";

#[test]
fn style_arrays_with_several_elements_are_fine() {
    for source in [
        "const Hello = () => <App {...props}>foo</App>;",
        "<App>foo</App>",
        "<App style={woop}>foo</App>",
        "<App style={{woop: \"woop\"}}>foo</App>",
        "<App style={[woope, wap]}>foo</App>",
        "<App className=\"asdf\" style={woop}>foo</App>",
    ] {
        assert!(lint("no-single-element-style-arrays", source).is_empty(), "source {source}");
    }
}

#[test]
fn single_element_arrays_are_unwrapped() {
    let cases = [
        ("<App style={[woop]}>foo</App>", "<App style={woop}>foo</App>"),
        ("<App style={[{woop: \"woop\"}]}>foo</App>", "<App style={{woop: \"woop\"}}>foo</App>"),
    ];
    for (source, output) in cases {
        let diagnostics = lint("no-single-element-style-arrays", source);
        assert_eq!(messages(&diagnostics), vec![UNNECESSARY_ARRAY]);
        let fix = diagnostics[0].fix.as_ref().unwrap();
        assert_eq!(apply_edits(source, &fix.edits).unwrap(), output);
    }
}

#[test]
fn warn_level_is_carried_into_findings() {
    let rule = RuleConfig::with_level(RuleLevel::Warn);
    let diagnostics = lint_with("no-single-element-style-arrays", rule, "A.js", "<App style={[woop]}>foo</App>");
    assert_eq!(diagnostics[0].severity, rnlint_analysis::Severity::Warning);
}
