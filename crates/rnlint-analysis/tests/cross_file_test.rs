//! no-unused-styles with `enableImportsCheck`: collections declared in other files.

mod common;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use common::{messages, rule_config};
use rnlint_analysis::{ExportCache, Linter};
use rnlint_core::config::LintConfig;

fn linter() -> Linter {
    let rule = rule_config(&[("enableImportsCheck", toml::Value::Boolean(true))]);
    Linter::new(LintConfig::default().with_rule("no-unused-styles", rule)).unwrap()
}

fn lint_app(linter: &Linter, dir: &Path, source: &str) -> Vec<String> {
    let app = dir.join("App.js");
    fs::write(&app, source).unwrap();
    messages(&linter.lint_file(&app).unwrap())
}

const APP: &str = "import { styles } from './styles';\nexport const App = () => <View style={styles.a} />;\n";

#[test]
fn imported_collections_are_checked() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("styles.js"),
        "export const styles = StyleSheet.create({ a: {}, b: {} });\n",
    )
    .unwrap();

    let linter = linter();
    let app = dir.path().join("App.js");
    fs::write(&app, APP).unwrap();
    let diagnostics = linter.lint_file(&app).unwrap();
    assert_eq!(messages(&diagnostics), vec!["Unused style detected: styles.b"]);
    // Reported on the import specifier of the consuming file.
    assert_eq!((diagnostics[0].start.line, diagnostics[0].start.column), (1, 10));
}

#[test]
fn imports_are_ignored_unless_enabled() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("styles.js"),
        "export const styles = StyleSheet.create({ a: {}, b: {} });\n",
    )
    .unwrap();
    let linter = Linter::new(LintConfig::all(["no-unused-styles"])).unwrap();
    assert!(lint_app(&linter, dir.path(), APP).is_empty());
}

#[test]
fn default_exports_and_renamed_bindings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("theme.js"),
        "export default StyleSheet.create({ title: {}, body: {} });\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("shared.js"),
        "const base = StyleSheet.create({ row: {} });\nexport { base as layout };\n",
    )
    .unwrap();
    let source = [
        "import theme from './theme';",
        "import { layout } from './shared';",
        "export const App = () => (",
        "  <View style={layout.row}><Text style={theme.title}>hi</Text></View>",
        ");",
    ]
    .join("\n");
    assert_eq!(lint_app(&linter(), dir.path(), &source), vec!["Unused style detected: theme.body"]);
}

#[test]
fn edits_to_imported_modules_are_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let styles = dir.path().join("styles.js");
    fs::write(&styles, "export const styles = StyleSheet.create({ a: {} });\n").unwrap();
    let cache = Arc::new(ExportCache::new());
    let linter = linter().with_export_cache(Arc::clone(&cache));

    assert!(lint_app(&linter, dir.path(), APP).is_empty());

    fs::write(&styles, "export const styles = StyleSheet.create({ a: {}, b: {}, c: {} });\n").unwrap();
    let file = fs::File::options().write(true).open(&styles).unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(10)).unwrap();
    drop(file);

    assert_eq!(
        lint_app(&linter, dir.path(), APP),
        vec!["Unused style detected: styles.b", "Unused style detected: styles.c"]
    );
    assert_eq!(cache.misses(), 2);
}

#[test]
fn unchanged_modules_are_served_from_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("styles.js"),
        "export const styles = StyleSheet.create({ a: {}, b: {} });\n",
    )
    .unwrap();
    let cache = Arc::new(ExportCache::new());
    let linter = linter().with_export_cache(Arc::clone(&cache));

    lint_app(&linter, dir.path(), APP);
    lint_app(&linter, dir.path(), APP);
    assert_eq!((cache.misses(), cache.hits()), (1, 1));
}

#[test]
fn parse_errors_in_imported_modules_are_reported_on_the_import() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.js"), "export const styles = StyleSheet.create({ a: {} \n").unwrap();
    let source = "import { styles } from './broken';\nexport const App = () => <View style={styles.a} />;\n";

    let found = lint_app(&linter(), dir.path(), source);
    assert_eq!(found.len(), 1);
    assert!(found[0].starts_with("Parse errors in imported module './broken': "), "{found:?}");
}

#[test]
fn scripts_and_packages_are_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("legacy.js"), "module.exports = StyleSheet.create({ a: {}, b: {} });\n").unwrap();
    let source = [
        "import { styles } from './legacy';",
        "import { Other } from 'react-native';",
        "export const App = () => <View style={styles.a} />;",
    ]
    .join("\n");
    assert!(lint_app(&linter(), dir.path(), &source).is_empty());
}
