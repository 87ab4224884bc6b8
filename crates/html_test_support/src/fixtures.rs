//! TOML fixture manifests for golden tests.
//!
//! A manifest is a TOML file with a `format` string and a `[[cases]]` array. Each crate
//! defines its own case type; this module handles reading, format checks and the name
//! filter taken from the environment.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const FIXTURE_FORMAT_V1: &str = "markup-tree-fixtures-v1";

/// Environment variable holding a comma-separated list of case names to run.
pub const FIXTURE_FILTER_ENV: &str = "MARKUP_TREE_FIXTURE";

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Active,
    Xfail,
}

/// Fields every case carries, whatever else the owning test reads from it.
pub trait NamedCase {
    fn name(&self) -> &str;
    fn status(&self) -> FixtureStatus;
    fn reason(&self) -> Option<&str>;
}

#[derive(Debug, Deserialize)]
struct Manifest<T> {
    format: String,
    cases: Vec<T>,
}

pub fn fixture_path(manifest_dir: &str, file: &str) -> PathBuf {
    Path::new(manifest_dir).join("tests").join("fixtures").join(file)
}

/// Reads and validates a manifest, panicking with the file path on any problem.
pub fn load_cases<T>(path: &Path) -> Vec<T>
where
    T: DeserializeOwned + NamedCase,
{
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture manifest {path:?}: {err}"));
    let manifest: Manifest<T> = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture manifest {path:?}: {err}"));
    assert_eq!(
        manifest.format, FIXTURE_FORMAT_V1,
        "unsupported fixture manifest format in {path:?}"
    );
    validate_cases(&manifest.cases, path);
    manifest.cases
}

fn validate_cases<T: NamedCase>(cases: &[T], path: &Path) {
    assert!(!cases.is_empty(), "fixture manifest {path:?} has no cases");
    let mut names = BTreeSet::new();
    for case in cases {
        let name = case.name();
        assert!(
            !name.trim().is_empty() && name == name.trim(),
            "fixture name must be non-empty and trimmed in {path:?}: '{name}'"
        );
        assert!(
            names.insert(name.to_string()),
            "duplicate fixture name in {path:?}: {name}"
        );
        if case.status() == FixtureStatus::Xfail {
            assert!(
                case.reason().is_some_and(|reason| !reason.trim().is_empty()),
                "xfail fixture must have a reason in {path:?}: {name}"
            );
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FixtureFilter {
    names: Option<BTreeSet<String>>,
}

impl FixtureFilter {
    pub fn from_env() -> Self {
        Self::from_list(std::env::var(FIXTURE_FILTER_ENV).ok().as_deref())
    }

    pub fn from_list(raw: Option<&str>) -> Self {
        let names: BTreeSet<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            names: (!names.is_empty()).then_some(names),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names
            .as_ref()
            .is_none_or(|names| names.contains(name))
    }
}

pub fn parse_env_bool(key: &str) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") | Some("") | None => false,
        Some(other) => panic!("unsupported {key} value '{other}'; use 1/0 or true/false"),
    }
}

/// Checks one case's result against its status. Returns a failure message for an
/// active case that failed, or for an xfail case that unexpectedly passed when
/// `strict_xpass` is set.
pub fn check_status<C: NamedCase>(
    case: &C,
    result: Result<(), String>,
    strict_xpass: bool,
) -> Option<String> {
    match (case.status(), result) {
        (FixtureStatus::Active, Ok(())) => None,
        (FixtureStatus::Active, Err(message)) => Some(format!("{}: {message}", case.name())),
        (FixtureStatus::Xfail, Err(_)) => None,
        (FixtureStatus::Xfail, Ok(())) => {
            let reason = case.reason().unwrap_or_default();
            if strict_xpass {
                Some(format!("{}: XPASS (expected to fail: {reason})", case.name()))
            } else {
                eprintln!("XPASS: {} :: {reason}", case.name());
                None
            }
        }
    }
}
