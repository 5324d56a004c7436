//! # panel_core - Roof Panel Counting Engine
//!
//! `panel_core` computes how many whole rectangular solar panels can be
//! tiled onto a rectangular roof, and ships a JSON-driven harness that
//! checks the calculation against expected counts.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs, results and reports implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for the file-facing edges
//!
//! ## Quick Start
//!
//! ```rust
//! use panel_core::count_panels;
//!
//! // 1x2 panels on a 3x5 roof
//! assert_eq!(count_panels(1, 2, 3, 5), 7);
//! // Orientation does not matter
//! assert_eq!(count_panels(2, 1, 5, 3), 7);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Panel count calculation
//! - [`geometry`] - Panel and roof dimension types
//! - [`test_cases`] - JSON test case files
//! - [`harness`] - Runs test cases and reports pass/fail
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod harness;
pub mod test_cases;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, count_panels, PanelInput, PanelLayout, PanelResult};
pub use errors::{CalcError, CalcResult};
pub use geometry::{Dimensions, PanelSpec, RoofSpec};
pub use harness::{run_suite, CaseOutcome, SuiteReport};
pub use test_cases::{load_test_cases, parse_test_cases, TestCase, TestSuite};
