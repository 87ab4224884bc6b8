//! Fixed acceptance battery: hand-picked inputs with the outcome each must produce.
//!
//! The root binary prints one line per case; the crate's own tests assert every case
//! passes.

use crate::ParseErrorCode::*;
use crate::{ParseError, ParseErrorCode, Vocabulary, next_tag, parse};
use std::fmt;
use Stage::{NextTag, Parse};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stage {
    /// A single [`next_tag`] call on the input.
    NextTag,
    /// A full [`parse`] of the input.
    Parse,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::NextTag, Stage::Parse];

    pub const fn title(self) -> &'static str {
        match self {
            Self::NextTag => "next_tag should return a next tag",
            Self::Parse => "parse should return a content tree",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expectation {
    Accept,
    Reject(ParseErrorCode),
}

#[derive(Clone, Copy, Debug)]
pub struct BatteryCase {
    pub stage: Stage,
    /// Shown in reports; usually the input itself, sometimes with a short note.
    pub label: &'static str,
    pub input: &'static str,
    pub expect: Expectation,
}

const fn accept(stage: Stage, label: &'static str, input: &'static str) -> BatteryCase {
    BatteryCase {
        stage,
        label,
        input,
        expect: Expectation::Accept,
    }
}

const fn reject(
    stage: Stage,
    label: &'static str,
    input: &'static str,
    code: ParseErrorCode,
) -> BatteryCase {
    BatteryCase {
        stage,
        label,
        input,
        expect: Expectation::Reject(code),
    }
}

pub const CASES: &[BatteryCase] = &[
    accept(NextTag, "<div>", "<div>"),
    accept(NextTag, "<html/>", "<html/>"),
    accept(NextTag, "<html />", "<html />"),
    accept(NextTag, "</div>", "</div>"),
    accept(NextTag, "</html >", "</html >"),
    accept(
        NextTag,
        r#"<div class="1 1_dd-ss" id="2 2_ss-dd">sdf<div>"#,
        r#"<div class="1 1_dd-ss" id="2 2_ss-dd">sdf<div>"#,
    ),
    reject(
        NextTag,
        r#"<div class="22>sdf<div>"#,
        r#"<div class="22>sdf<div>"#,
        UnexpectedTagContent,
    ),
    reject(
        NextTag,
        r#"<div id=3"">sdf<div>"#,
        r#"<div id=3"">sdf<div>"#,
        UnexpectedTagContent,
    ),
    reject(
        NextTag,
        r#"<div id=3">sdf<div>"#,
        r#"<div id=3">sdf<div>"#,
        UnexpectedTagContent,
    ),
    reject(
        NextTag,
        "<div id=3>sdf<div>",
        "<div id=3>sdf<div>",
        UnexpectedTagContent,
    ),
    reject(
        NextTag,
        "<div id=>sdf<div>",
        "<div id=>sdf<div>",
        UnexpectedTagContent,
    ),
    reject(
        NextTag,
        "<div id>sdf<div>",
        "<div id>sdf<div>",
        UnexpectedTagContent,
    ),
    reject(NextTag, "<span>", "<span>", UnknownTag),
    accept(NextTag, "< div>", "< div>"),
    reject(NextTag, "< /div>", "< /div>", InvalidSlashPosition),
    accept(NextTag, "</ div>", "</ div>"),
    accept(NextTag, "<> (not a tag)", "<>"),
    reject(NextTag, "</> (empty tag)", "</>", EmptyTag),
    reject(NextTag, "<//> (empty tag)", "<//>", EmptyTag),
    accept(NextTag, "</ (not a tag)", "</"),
    reject(NextTag, "< > (empty tag)", "< >", EmptyTag),
    reject(NextTag, "<!>", "<!>", UnknownTag),
    reject(NextTag, "<!-->", "<!-->", UnknownTag),
    reject(NextTag, "<!-- -->", "<!-- -->", UnknownTag),
    reject(NextTag, "<!-- sdf -->", "<!-- sdf -->", UnknownTag),
    reject(NextTag, "<div//>", "<div//>", TooManySlashes),
    reject(NextTag, "</div/>", "</div/>", TooManySlashes),
    reject(NextTag, "<//div>", "<//div>", TooManySlashes),
    reject(NextTag, "<div sdfs>", "<div sdfs>", UnexpectedTagContent),
    reject(
        NextTag,
        r#"</html sdf="">"#,
        r#"</html sdf="">"#,
        AttributesOnClosingTag,
    ),
    reject(
        NextTag,
        r#"<html sdf="">"#,
        r#"<html sdf="">"#,
        InvalidAttribute,
    ),
    reject(
        NextTag,
        r#"<html class="" id="">"#,
        r#"<html class="" id="">"#,
        InvalidAttribute,
    ),
    reject(Parse, "<div>ertet", "<div>ertet", UnclosedTag),
    accept(
        Parse,
        r#"<div class="1 1_dd-ss" id="2 2_ss-dd">sdf</div>"#,
        r#"<div class="1 1_dd-ss" id="2 2_ss-dd">sdf</div>"#,
    ),
    reject(
        Parse,
        r#"<div class="1 1_dd-ss" id="2 2_ss-dd">sdf<div>"#,
        r#"<div class="1 1_dd-ss" id="2 2_ss-dd">sdf<div>"#,
        UnclosedTag,
    ),
    reject(
        Parse,
        "</div>sdf</div>",
        "</div>sdf</div>",
        UnmatchedClosingTag,
    ),
    accept(Parse, "<div>1</div><div>2</div>", "<div>1</div><div>2</div>"),
    accept(Parse, "<div>1<div/>2</div>", "<div>1<div/>2</div>"),
    accept(
        Parse,
        r#"<div>1<div id=""/>2</div>"#,
        r#"<div>1<div id=""/>2</div>"#,
    ),
    accept(
        Parse,
        "<div>1<div>2</div>3</div>",
        "<div>1<div>2</div>3</div>",
    ),
    accept(Parse, r#"<div class="" />"#, r#"<div class="" />"#),
    reject(
        Parse,
        r#"<html class="" />"#,
        r#"<html class="" />"#,
        InvalidAttribute,
    ),
    accept(Parse, "<html />", "<html />"),
];

/// What running one [`BatteryCase`] produced.
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    pub case: BatteryCase,
    pub result: Result<(), ParseError>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        match (self.case.expect, &self.result) {
            (Expectation::Accept, Ok(())) => true,
            (Expectation::Reject(code), Err(err)) => err.code() == code,
            _ => false,
        }
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.case.label;
        match (self.case.expect, &self.result) {
            (Expectation::Accept, Ok(())) => write!(f, "{label} has no errors")?,
            (Expectation::Accept, Err(err)) => write!(f, "{label} throws an error: {err}")?,
            (Expectation::Reject(_), Ok(())) => {
                write!(f, "{label} does not throw any errors")?
            }
            (Expectation::Reject(code), Err(err)) if err.code() == code => {
                write!(f, "{label} throws an error")?
            }
            (Expectation::Reject(code), Err(err)) => {
                write!(f, "{label} throws {} instead of {code}", err.code())?
            }
        }
        f.write_str(if self.passed() { " (success)" } else { " (fail)" })
    }
}

pub fn run_case(case: &BatteryCase) -> CaseOutcome {
    let result = match case.stage {
        Stage::NextTag => next_tag(case.input, &Vocabulary::default()).map(|_| ()),
        Stage::Parse => parse(case.input).map(|_| ()),
    };
    CaseOutcome {
        case: *case,
        result,
    }
}

pub fn run_all() -> Vec<CaseOutcome> {
    CASES.iter().map(run_case).collect()
}

#[cfg(test)]
mod tests {
    use super::{CASES, Expectation, Stage, run_all, run_case};
    use crate::ParseErrorCode;
    use std::collections::HashSet;

    #[test]
    fn battery_cases_have_metadata() {
        let mut seen = HashSet::new();
        for case in CASES {
            assert!(!case.label.trim().is_empty(), "case label must be non-empty");
            assert!(
                case.label.starts_with(case.input),
                "label should lead with the input: {}",
                case.label
            );
            assert!(
                seen.insert((case.stage, case.input)),
                "duplicate case: {:?} {}",
                case.stage,
                case.input
            );
        }
        for stage in Stage::ALL {
            assert!(CASES.iter().any(|case| case.stage == stage), "{stage:?}");
        }
    }

    #[test]
    fn battery_passes() {
        let failures: Vec<String> = run_all()
            .iter()
            .filter(|outcome| !outcome.passed())
            .map(|outcome| format!("{:?} :: {outcome}", outcome.case.stage))
            .collect();
        if !failures.is_empty() {
            panic!("battery failures:\n{}", failures.join("\n"));
        }
    }

    #[test]
    fn outcome_lines_name_the_result() {
        let accepted = run_case(&CASES[0]);
        assert_eq!(accepted.to_string(), "<div> has no errors (success)");

        let rejected = CASES
            .iter()
            .find(|case| case.input == "<span>")
            .map(run_case)
            .expect("span case");
        assert_eq!(rejected.case.expect, Expectation::Reject(ParseErrorCode::UnknownTag));
        assert_eq!(rejected.to_string(), "<span> throws an error (success)");
    }
}
