//! # Test Harness
//!
//! Runs a list of [`TestCase`]s through the panel calculation and collects
//! a [`SuiteReport`]. Rendering is plain text via `Display` for terminals,
//! or JSON via serde for scripts.
//!
//! ## Example
//!
//! ```rust
//! use panel_core::harness::run_suite;
//! use panel_core::test_cases::TestCase;
//!
//! let report = run_suite(&[TestCase::new(1, 1, 5, 5, 25)]);
//! assert!(report.all_passed());
//! println!("{report}");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::panels::calculate;
use crate::test_cases::TestCase;

/// Result of running a single test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// 1-based position in the suite
    pub index: usize,

    pub case: TestCase,

    /// Panel count the calculation produced
    pub actual: u64,

    pub passed: bool,
}

impl CaseOutcome {
    pub fn status_label(&self) -> &'static str {
        if self.passed { "PASSED" } else { "FAILED" }
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let case = &self.case;
        match &case.description {
            Some(description) => writeln!(f, "Test {} ({}):", self.index, description)?,
            None => writeln!(f, "Test {}:", self.index)?,
        }
        writeln!(f, "  Panels: {}, Roof: {}", case.panel(), case.roof())?;
        writeln!(f, "  Expected: {}, Got: {}", case.expected, self.actual)?;
        writeln!(f, "  Status: {}", self.status_label())
    }
}

/// Outcomes for a whole suite, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// True when every case passed. An empty suite counts as passing.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        write!(f, "{}/{} passed", self.passed_count(), self.total())
    }
}

/// Run one case. `index` is the 1-based position used in reports.
pub fn run_case(index: usize, case: &TestCase) -> CaseOutcome {
    let actual = calculate(&case.to_input()).panel_count;
    let passed = actual == case.expected;
    if passed {
        debug!(index, actual, "test case passed");
    } else {
        warn!(
            index,
            panel = %case.panel(),
            roof = %case.roof(),
            expected = case.expected,
            actual,
            "test case failed"
        );
    }
    CaseOutcome {
        index,
        case: case.clone(),
        actual,
        passed,
    }
}

/// Run every case in order.
pub fn run_suite(cases: &[TestCase]) -> SuiteReport {
    let outcomes = cases
        .iter()
        .enumerate()
        .map(|(i, case)| run_case(i + 1, case))
        .collect();
    SuiteReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cases() -> Vec<TestCase> {
        vec![
            TestCase::new(1, 2, 2, 4, 4),
            TestCase::new(1, 2, 3, 5, 7),
            TestCase::new(2, 2, 1, 10, 0),
        ]
    }

    #[test]
    fn test_all_pass() {
        let report = run_suite(&sample_cases());
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed_count(), 3);
        assert_eq!(report.failed_count(), 0);
        assert!(report.all_passed());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_failure_is_reported() {
        let mut cases = sample_cases();
        cases.push(TestCase::new(1, 1, 5, 5, 24));
        let report = run_suite(&cases);

        assert!(!report.all_passed());
        assert_eq!(report.failed_count(), 1);
        let failure = report.failures().next().unwrap();
        assert_eq!(failure.index, 4);
        assert_eq!(failure.actual, 25);
    }

    #[test]
    fn test_empty_suite_passes() {
        let report = run_suite(&[]);
        assert!(report.all_passed());
        assert_eq!(report.to_string(), "0/0 passed");
    }

    #[test]
    fn test_case_rendering() {
        let outcome = run_case(2, &TestCase::new(1, 2, 3, 5, 7));
        assert_eq!(
            outcome.to_string(),
            "Test 2:\n  Panels: 1x2, Roof: 3x5\n  Expected: 7, Got: 7\n  Status: PASSED\n"
        );

        let failed = run_case(1, &TestCase::new(1, 1, 5, 5, 3).with_description("wrong"));
        let text = failed.to_string();
        assert!(text.starts_with("Test 1 (wrong):\n"));
        assert!(text.contains("Expected: 3, Got: 25"));
        assert!(text.ends_with("Status: FAILED\n"));
    }

    #[test]
    fn test_report_summary_line() {
        let mut cases = sample_cases();
        cases.push(TestCase::new(3, 1, 5, 5, 6));
        let text = run_suite(&cases).to_string();
        assert!(text.ends_with("3/4 passed"));
    }

    #[test]
    fn test_report_serialization() {
        let report = run_suite(&sample_cases());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][1]["actual"], 7);
        assert_eq!(json["outcomes"][1]["case"]["roofH"], 5);
        assert_eq!(json["outcomes"][2]["passed"], true);
    }
}
