use css::{Presentation, apply_selector, outline_with_presentation};
use html::parse;
use html_test_support::diff_lines;
use html_test_support::fixtures::{
    FixtureFilter, FixtureStatus, NamedCase, check_status, fixture_path, load_cases,
    parse_env_bool,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SelectCase {
    name: String,
    #[serde(default)]
    status: FixtureStatus,
    reason: Option<String>,
    input: String,
    /// Applied to the same overlay before `selector`.
    #[serde(default)]
    before: Vec<String>,
    selector: String,
    matches: usize,
    outline: Vec<String>,
}

impl NamedCase for SelectCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> FixtureStatus {
        self.status
    }

    fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

fn run_case(case: &SelectCase) -> Result<(), String> {
    let forest = parse(&case.input).map_err(|err| format!("input does not parse: {err}"))?;
    let mut presentation = Presentation::new();
    for selector in &case.before {
        apply_selector(&forest, selector, &mut presentation);
    }
    let matches = apply_selector(&forest, &case.selector, &mut presentation);
    if matches != case.matches {
        return Err(format!(
            "selector `{}` matched {matches} elements, expected {}",
            case.selector, case.matches
        ));
    }
    let actual = outline_with_presentation(&forest, &presentation, usize::MAX);
    if actual != case.outline {
        return Err(format!(
            "selector `{}`\n{}",
            case.selector,
            diff_lines(&case.outline, &actual)
        ));
    }
    Ok(())
}

#[test]
fn golden_selector_fixtures() {
    let path = fixture_path(env!("CARGO_MANIFEST_DIR"), "selectors.toml");
    let cases: Vec<SelectCase> = load_cases(&path);
    let filter = FixtureFilter::from_env();
    let strict_xpass = parse_env_bool("MARKUP_TREE_STRICT_XPASS");
    let mut ran = 0usize;
    let mut failures = Vec::new();
    for case in cases.iter().filter(|case| filter.matches(&case.name)) {
        ran += 1;
        failures.extend(check_status(case, run_case(case), strict_xpass));
    }
    assert!(ran > 0, "no fixtures matched filter");
    if !failures.is_empty() {
        panic!("golden selector failures:\n{}", failures.join("\n\n"));
    }
}
