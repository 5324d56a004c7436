//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> *Result` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`panels`] - Whole solar panels tiled onto a rectangular roof

pub mod panels;

// Re-export commonly used types
pub use panels::{calculate, count_panels, PanelInput, PanelLayout, PanelResult, TilingCase};
