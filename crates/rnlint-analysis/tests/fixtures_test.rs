//! End-to-end run over the sample React Native project in `test-fixtures/`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rnlint_analysis::{FileReport, Linter, Severity};
use rnlint_core::config::LintConfig;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/react-native")
}

fn run() -> BTreeMap<String, FileReport> {
    let root = fixture_root();
    let config = LintConfig::load(&root, None).unwrap();
    let linter = Linter::new(config).unwrap();

    let mut files: Vec<PathBuf> = std::fs::read_dir(&root)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "js"))
        .collect();
    files.sort();

    linter
        .lint_files(&files)
        .into_iter()
        .map(|result| {
            let report = result.unwrap();
            let name = PathBuf::from(&report.path).file_name().unwrap().to_string_lossy().into_owned();
            (name, report)
        })
        .collect()
}

fn messages(report: &FileReport) -> Vec<(&str, &str)> {
    report.diagnostics.iter().map(|d| (d.rule.as_str(), d.message.as_str())).collect()
}

#[test]
fn every_rule_fires_on_the_app_component() {
    let reports = run();
    let app = messages(&reports["App.js"]);
    let expected = [
        ("no-unused-styles", "Unused style detected: theme.unusedBanner"),
        ("no-single-element-style-arrays", "Single element style arrays are not necessary and cause unnecessary re-renders"),
        ("no-raw-text", "Raw text (hello) cannot be used outside of a <Text> tag"),
        ("no-inline-styles", "Inline style: { marginTop: 4 }"),
        ("sort-styles", "Expected class names to be in ascending order. 'highlight' should be before 'row'."),
        ("no-color-literals", "Color literal: { backgroundColor: '#ffeecc' }"),
        ("no-unused-styles", "Unused style detected: styles.legacy"),
    ];
    for finding in expected {
        assert!(app.contains(&finding), "missing {finding:?} in {app:#?}");
    }
    assert_eq!(app.len(), expected.len(), "{app:#?}");
}

#[test]
fn levels_come_from_the_project_file() {
    let reports = run();
    for diagnostic in &reports["App.js"].diagnostics {
        let expected = match diagnostic.rule.as_str() {
            "no-unused-styles" | "no-raw-text" | "split-platform-components" => Severity::Error,
            _ => Severity::Warning,
        };
        assert_eq!(diagnostic.severity, expected, "{}", diagnostic.rule);
    }
}

#[test]
fn clean_and_platform_files() {
    let reports = run();
    assert!(reports["theme.js"].diagnostics.is_empty());
    assert!(reports["Spinner.ios.js"].diagnostics.is_empty());
    assert_eq!(
        messages(&reports["Progress.js"]),
        vec![
            ("split-platform-components", "IOS and Android components can't be mixed"),
            ("split-platform-components", "IOS and Android components can't be mixed"),
        ]
    );
}

#[test]
fn findings_are_in_source_order() {
    let reports = run();
    let app = &reports["App.js"].diagnostics;
    assert!(app.windows(2).all(|pair| pair[0].sort_key() <= pair[1].sort_key()));
}
