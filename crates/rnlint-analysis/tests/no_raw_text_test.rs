//! Tests for no-raw-text.

mod common;

use common::{lint, lint_with, messages, rule_config};

const RULE: &str = "no-raw-text";

fn in_render(jsx: &str) -> String {
    format!(
        "export default class MyComponent extends Component {{\n  render() {{\n    const text = 'some text';\n    return ({jsx});\n  }}\n}}\n"
    )
}

fn raw(jsx: &str) -> Vec<String> {
    messages(&lint(RULE, &in_render(jsx)))
}

#[test]
fn text_inside_text_elements_is_fine() {
    for jsx in [
        "<View><Text>some text</Text></View>",
        "<View><Text>{`${text}`}</Text></View>",
        "<View><Text>{'some text'}</Text></View>",
        "<Animated.Text>moving</Animated.Text>",
        "<View accessibilityLabel=\"label\" testID={'id'} />",
        "<View>\n  <Text>a</Text>\n</View>",
    ] {
        assert!(raw(jsx).is_empty(), "jsx {jsx}");
    }
}

#[test]
fn raw_text_outside_text_elements_is_reported() {
    let cases = [
        ("<View>some text</View>", "Raw text (some text) cannot be used outside of a <Text> tag"),
        ("<View>{`${text}`}</View>", "Raw text (TemplateLiteral: text) cannot be used outside of a <Text> tag"),
        ("<View>{'some text'}</View>", "Raw text (some text) cannot be used outside of a <Text> tag"),
        ("<View>{`plain`}</View>", "Raw text (TemplateLiteral: plain) cannot be used outside of a <Text> tag"),
        ("<View>{' '}</View>", "Whitespace(s) cannot be used outside of a <Text> tag"),
    ];
    for (jsx, expected) in cases {
        assert_eq!(raw(jsx), vec![expected], "jsx {jsx}");
    }
}

#[test]
fn the_nearest_element_decides() {
    assert_eq!(
        raw("<Text><View>inner</View></Text>"),
        vec!["Raw text (inner) cannot be used outside of a <Text> tag"]
    );
    assert!(raw("<View><Text>inner</Text></View>").is_empty());
}

#[test]
fn finding_points_at_the_text_node() {
    let source = "const App = () => <View>hello</View>;";
    let diagnostics = lint(RULE, source);
    assert_eq!(diagnostics.len(), 1);
    let span = diagnostics[0].span;
    assert_eq!(&source[span.start as usize..span.end as usize], "hello");

    assert!(lint(RULE, "const App = () => <Text>hello</Text>;").is_empty());
}

#[test]
fn skipped_elements_may_hold_text() {
    let skip = toml::Value::Array(vec![toml::Value::String("Title".to_string())]);
    let config = rule_config(&[("skip", skip)]);
    let source = "const App = () => <View><Title>hello</Title><Other>bye</Other></View>;";
    assert_eq!(
        messages(&lint_with(RULE, config, "App.js", source)),
        vec!["Raw text (bye) cannot be used outside of a <Text> tag"]
    );
}

#[test]
fn text_with_character_references_is_one_finding() {
    assert_eq!(
        raw("<View>fish &amp; chips</View>"),
        vec!["Raw text (fish & chips) cannot be used outside of a <Text> tag"]
    );
    assert!(raw("<View><Text>fish &amp; chips &#169;</Text></View>").is_empty());
}
