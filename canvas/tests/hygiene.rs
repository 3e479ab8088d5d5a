//! Source hygiene checks run at test time.
//!
//! Scans the production sources of the canvas crate and the client's pure
//! state modules for patterns that crash the page, silently drop errors, or
//! bypass the `log` facade. Both crates are also checked for hand-written JS
//! imports, and the canvas manifest for unused web-sys features. Every
//! pattern has a budget of zero.

use std::fs;
use std::path::Path;

/// Production source roots, relative to the canvas crate.
const ROOTS: &[&str] = &["src", "../client/src/state"];

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with `?` or map into an error type" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with `?` or map into an error type" },
    Budget { pattern: "panic!(", max: 0, why: "a panic tears down the wasm instance" },
    Budget { pattern: "unreachable!(", max: 0, why: "a panic tears down the wasm instance" },
    Budget { pattern: "todo!(", max: 0, why: "stubs do not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs do not ship" },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "inspect the result or log it" },
    Budget { pattern: ".ok()", max: 0, why: "inspect the error or log it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
];

const CONSOLE: &[Budget] = &[
    Budget { pattern: "println!(", max: 0, why: "use the log facade" },
    Budget { pattern: "eprintln!(", max: 0, why: "use the log facade" },
    Budget { pattern: "dbg!(", max: 0, why: "use log::debug!" },
];

const BINDINGS: &[Budget] = &[
    Budget { pattern: "extern \"C\"", max: 0, why: "use the typed web-sys bindings" },
    Budget { pattern: "#[wasm_bindgen(", max: 0, why: "use the typed web-sys bindings" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    for root in ROOTS {
        collect_rs_files(Path::new(root), &mut files);
    }
    assert!(!files.is_empty(), "no sources found under {ROOTS:?}");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Every budget that is exceeded, formatted with per-file hit counts.
fn violations(files: &[SourceFile], budgets: &[Budget]) -> Vec<String> {
    budgets
        .iter()
        .filter_map(|budget| {
            let hits: Vec<(&str, usize)> = files
                .iter()
                .map(|f| (f.path.as_str(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
                .filter(|(_, count)| *count > 0)
                .collect();
            let total: usize = hits.iter().map(|(_, c)| c).sum();
            if total <= budget.max {
                return None;
            }
            let detail = hits
                .iter()
                .map(|(path, count)| format!("  {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            Some(format!(
                "`{}` found {total}, max {} ({}).\n{detail}",
                budget.pattern, budget.max, budget.why
            ))
        })
        .collect()
}

fn assert_within(budgets: &[Budget]) {
    let failures = violations(&source_files(), budgets);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn no_panicking_calls() {
    assert_within(PANICS);
}

#[test]
fn no_silently_discarded_errors() {
    assert_within(SILENT_LOSS);
}

#[test]
fn no_console_printing() {
    assert_within(CONSOLE);
}

#[test]
fn no_hand_written_js_imports() {
    let mut files = Vec::new();
    for root in ["src", "../client/src"] {
        collect_rs_files(Path::new(root), &mut files);
    }
    let failures = violations(&files, BINDINGS);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn budgets_detect_violations() {
    let files = vec![SourceFile { path: "fake.rs".to_owned(), content: "let x = y.unwrap();\n".to_owned() }];
    assert_eq!(violations(&files, PANICS).len(), 1);
    assert!(violations(&files, SILENT_LOSS).is_empty());
}

/// web-sys features reached only through return types of methods the sources
/// call (`window()`, `document()`, `body()`, `append_child`, `measure_text`).
const INDIRECT_WEB_SYS_FEATURES: &[&str] = &["Document", "Element", "HtmlElement", "Node", "TextMetrics", "Window"];

fn web_sys_features(manifest: &str) -> Vec<String> {
    let Some(section) = manifest.split("[dependencies.web-sys]").nth(1) else {
        return Vec::new();
    };
    let Some(list) = section.split("features = [").nth(1).and_then(|rest| rest.split(']').next()) else {
        return Vec::new();
    };
    list.split(',')
        .map(|f| f.trim().trim_matches('"').to_owned())
        .filter(|f| !f.is_empty())
        .collect()
}

#[test]
fn web_sys_features_are_used() {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    let features = web_sys_features(&manifest);
    assert!(!features.is_empty(), "no web-sys features parsed from Cargo.toml");

    let mut sources = Vec::new();
    collect_rs_files(Path::new("src"), &mut sources);
    let unused: Vec<&String> = features
        .iter()
        .filter(|f| !INDIRECT_WEB_SYS_FEATURES.contains(&f.as_str()))
        .filter(|f| !sources.iter().any(|s| s.content.contains(f.as_str())))
        .collect();
    assert!(unused.is_empty(), "web-sys features enabled but never named in src: {unused:?}");
}

#[test]
fn web_sys_feature_list_parses() {
    let manifest = "[dependencies.web-sys]\nversion = \"0.3\"\nfeatures = [\n    \"Window\",\n    \"CssStyleDeclaration\",\n]\n";
    assert_eq!(web_sys_features(manifest), vec!["Window".to_owned(), "CssStyleDeclaration".to_owned()]);
}
