use crate::diff_lines;
use html::Node;
use html::dom_snapshot::{DomSnapshot, DomSnapshotOptions};

pub fn snapshot_lines(forest: &[Node], options: DomSnapshotOptions) -> Vec<String> {
    DomSnapshot::new(forest, options).as_lines().to_vec()
}

/// Compares a forest against expected snapshot lines, returning a readable diff on
/// mismatch.
pub fn check_snapshot(
    expected: &[String],
    forest: &[Node],
    options: DomSnapshotOptions,
) -> Result<(), String> {
    let actual = snapshot_lines(forest, options);
    if actual == expected {
        return Ok(());
    }
    Err(format!(
        "snapshot mismatch\n{}\nactual snapshot:\n{}",
        diff_lines(expected, &actual),
        actual.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_snapshot_reports_first_difference() {
        let forest = html::parse("<div>a</div>").expect("valid");
        let good = vec!["<div>".to_string(), "  \"a\"".to_string()];
        assert_eq!(check_snapshot(&good, &forest, DomSnapshotOptions::default()), Ok(()));

        let bad = vec!["<div>".to_string(), "  \"b\"".to_string()];
        let err = check_snapshot(&bad, &forest, DomSnapshotOptions::default())
            .expect_err("mismatch");
        assert!(err.contains("first mismatch at line 2"), "{err}");
    }
}
