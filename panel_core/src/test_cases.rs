//! # Test Case Files
//!
//! Reads lists of panel-count test cases from JSON. The file path is always
//! passed in by the caller; nothing is resolved against the working
//! directory implicitly.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "testCases": [
//!     { "panelW": 1, "panelH": 2, "roofW": 2, "roofH": 4, "expected": 4 },
//!     { "panelW": 1, "panelH": 2, "roofW": 3, "roofH": 5, "expected": 7 }
//!   ]
//! }
//! ```
//!
//! All five numeric fields are required integers. An optional
//! `description` string is carried through to reports.
//!
//! ## Example
//!
//! ```rust,no_run
//! use panel_core::test_cases::load_test_cases;
//! use std::path::Path;
//!
//! let cases = load_test_cases(Path::new("fixtures/test_cases.json"))?;
//! println!("Loaded {} cases", cases.len());
//! # Ok::<(), panel_core::errors::CalcError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::panels::PanelInput;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{PanelSpec, RoofSpec};

/// One expected panel count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "panelW")]
    pub panel_w: i32,

    #[serde(rename = "panelH")]
    pub panel_h: i32,

    #[serde(rename = "roofW")]
    pub roof_w: i32,

    #[serde(rename = "roofH")]
    pub roof_h: i32,

    /// Panel count the calculation must produce
    pub expected: u64,

    /// Free-form note shown in reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TestCase {
    pub fn new(panel_w: i32, panel_h: i32, roof_w: i32, roof_h: i32, expected: u64) -> Self {
        TestCase {
            panel_w,
            panel_h,
            roof_w,
            roof_h,
            expected,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn panel(&self) -> PanelSpec {
        PanelSpec::new(self.panel_w, self.panel_h)
    }

    pub fn roof(&self) -> RoofSpec {
        RoofSpec::new(self.roof_w, self.roof_h)
    }

    /// Calculation input for this case, labelled with its description.
    pub fn to_input(&self) -> PanelInput {
        PanelInput::new(
            self.description.clone().unwrap_or_default(),
            self.panel(),
            self.roof(),
        )
    }
}

/// Root object of a test case file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(rename = "testCases")]
    pub test_cases: Vec<TestCase>,
}

impl TestSuite {
    /// Unwrap the case list, rejecting a suite that would check nothing.
    pub fn into_cases(self) -> CalcResult<Vec<TestCase>> {
        if self.test_cases.is_empty() {
            return Err(CalcError::invalid_input(
                "testCases",
                "[]",
                "At least one test case is required",
            ));
        }
        Ok(self.test_cases)
    }
}

/// Parse test cases from a JSON string.
///
/// # Returns
///
/// * `Ok(Vec<TestCase>)` - Cases in file order
/// * `Err(CalcError::SerializationError)` - Invalid JSON, missing fields, or
///   a dimension that is not an integer in `i32` range
/// * `Err(CalcError::InvalidInput)` - The `testCases` list is empty
pub fn parse_test_cases(json: &str) -> CalcResult<Vec<TestCase>> {
    let suite: TestSuite =
        serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))?;
    suite.into_cases()
}

/// Load test cases from a file.
///
/// # Arguments
///
/// * `path` - Path to the JSON test case file
///
/// # Returns
///
/// * `Ok(Vec<TestCase>)` - Successfully loaded cases
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidInput)` - The file lists no cases
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_test_cases(path: &Path) -> CalcResult<Vec<TestCase>> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let suite: TestSuite =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    debug!(path = %path.display(), cases = suite.test_cases.len(), "loaded test cases");
    suite.into_cases()
}
