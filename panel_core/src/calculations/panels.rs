//! # Panel Count Calculation
//!
//! Counts how many whole rectangular panels fit on a rectangular roof.
//!
//! ## Method
//!
//! Both rectangles are normalized to `(long, short)`: the roof to `(x, y)`
//! and the panel to `(a, b)`. Two grid-aligned layouts are evaluated:
//!
//! 1. **Long along long**: the panel's long side runs along the roof's long
//!    side, giving `(x / a) * (y / b)` panels. The strip of width
//!    `x - (x / a) * a` left over along `x` is then filled with rotated
//!    panels when it is at least `b` wide: `(y / a) * (strip / b)`.
//! 2. **Long along short**: the panel's long side runs along the roof's
//!    short side, giving `(x / b) * (y / a)` panels. The leftover strip
//!    along `y` is filled the same way: `(x / a) * (strip / b)`.
//!
//! The larger total wins. All divisions are integer divisions.
//!
//! This is a greedy two-orientation heuristic, not an exhaustive packer:
//! only one leftover strip is corrected per layout, so irregular optimal
//! packings may be undercounted. It is deterministic and O(1).
//!
//! ## Degenerate geometry
//!
//! If any normalized side is zero or negative the result is 0 panels. This
//! is not an error.
//!
//! ## Example
//!
//! ```rust
//! use panel_core::calculations::panels::{calculate, count_panels, PanelInput};
//! use panel_core::geometry::{PanelSpec, RoofSpec};
//!
//! assert_eq!(count_panels(1, 2, 3, 5), 7);
//!
//! let input = PanelInput::new("South face", PanelSpec::new(1, 2), RoofSpec::new(3, 5));
//! let result = calculate(&input);
//! assert_eq!(result.panel_count, 7);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{Dimensions, PanelSpec, RoofSpec};

/// Input parameters for a panel count.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "South face",
///   "panel": { "width": 1, "height": 2 },
///   "roof": { "width": 3, "height": 5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelInput {
    /// User label for this roof (e.g., "South face", "Garage")
    #[serde(default)]
    pub label: String,

    /// Panel size, any orientation
    pub panel: PanelSpec,

    /// Roof size, any orientation
    pub roof: RoofSpec,
}

impl PanelInput {
    pub fn new(label: impl Into<String>, panel: PanelSpec, roof: RoofSpec) -> Self {
        PanelInput {
            label: label.into(),
            panel,
            roof,
        }
    }
}

/// Panels placed by one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TilingCase {
    /// Panels in the main grid
    pub primary_grid: u64,

    /// Rotated panels added in the leftover strip
    pub strip_fill: u64,
}

impl TilingCase {
    pub fn total(&self) -> u64 {
        self.primary_grid + self.strip_fill
    }
}

/// Which layout produced the winning count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelLayout {
    /// Panel long side along the roof long side
    LongAlongLong,
    /// Panel long side along the roof short side
    LongAlongShort,
}

impl PanelLayout {
    pub fn description(&self) -> &'static str {
        match self {
            PanelLayout::LongAlongLong => "panel long side along roof long side",
            PanelLayout::LongAlongShort => "panel long side along roof short side",
        }
    }
}

/// Results from a panel count.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_count": 7,
///   "long_along_long": { "primary_grid": 6, "strip_fill": 1 },
///   "long_along_short": { "primary_grid": 5, "strip_fill": 2 },
///   "layout": "long_along_long"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelResult {
    /// Maximum number of whole panels that fit
    pub panel_count: u64,

    /// Breakdown for the long-along-long layout
    pub long_along_long: TilingCase,

    /// Breakdown for the long-along-short layout
    pub long_along_short: TilingCase,

    /// Winning layout, `None` when no panel fits
    pub layout: Option<PanelLayout>,
}

/// Count panels for a labelled input and report both layouts.
///
/// Never fails: degenerate geometry yields a zero result.
pub fn calculate(input: &PanelInput) -> PanelResult {
    let result = evaluate(input.panel.dimensions(), input.roof.dimensions());
    debug!(
        label = %input.label,
        panel = %input.panel,
        roof = %input.roof,
        long_along_long = result.long_along_long.total(),
        long_along_short = result.long_along_short.total(),
        panel_count = result.panel_count,
        "panel count calculated"
    );
    result
}

/// Maximum number of `panel_width x panel_height` panels that fit on a
/// `roof_width x roof_height` roof.
///
/// Orientation of either pair does not matter. Returns 0 if any side is
/// zero or negative.
///
/// ```rust
/// use panel_core::calculations::panels::count_panels;
///
/// assert_eq!(count_panels(1, 1, 5, 5), 25);
/// assert_eq!(count_panels(2, 1, 0, 5), 0);
/// ```
pub fn count_panels(
    panel_width: i32,
    panel_height: i32,
    roof_width: i32,
    roof_height: i32,
) -> u64 {
    evaluate(
        Dimensions::new(panel_width, panel_height),
        Dimensions::new(roof_width, roof_height),
    )
    .panel_count
}

fn evaluate(panel: Dimensions, roof: Dimensions) -> PanelResult {
    if panel.is_degenerate() || roof.is_degenerate() {
        return PanelResult::default();
    }

    // Sides are positive past the guard, so widening to u64 is lossless and
    // every product of two quotients stays below 2^62.
    let (x, y) = widen(roof.normalized());
    let (a, b) = widen(panel.normalized());

    let long_along_long = tile_long_along_long(x, y, a, b);
    let long_along_short = tile_long_along_short(x, y, a, b);

    let panel_count = long_along_long.total().max(long_along_short.total());
    let layout = if panel_count == 0 {
        None
    } else if long_along_long.total() >= long_along_short.total() {
        Some(PanelLayout::LongAlongLong)
    } else {
        Some(PanelLayout::LongAlongShort)
    };

    PanelResult {
        panel_count,
        long_along_long,
        long_along_short,
        layout,
    }
}

fn tile_long_along_long(x: u64, y: u64, a: u64, b: u64) -> TilingCase {
    let primary_grid = (x / a) * (y / b);
    // Strip left along x, filled with panels turned so `a` runs along y
    let leftover = x - (x / a) * a;
    let strip_fill = if leftover >= b { (y / a) * (leftover / b) } else { 0 };
    TilingCase {
        primary_grid,
        strip_fill,
    }
}

fn tile_long_along_short(x: u64, y: u64, a: u64, b: u64) -> TilingCase {
    let primary_grid = (x / b) * (y / a);
    // Strip left along y, filled with panels turned so `a` runs along x
    let leftover = y - (y / a) * a;
    let strip_fill = if leftover >= b { (x / a) * (leftover / b) } else { 0 };
    TilingCase {
        primary_grid,
        strip_fill,
    }
}

fn widen((long, short): (i32, i32)) -> (u64, u64) {
    (u64::from(long.unsigned_abs()), u64::from(short.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pw: i32, ph: i32, rw: i32, rh: i32) -> PanelInput {
        PanelInput::new("Test Roof", PanelSpec::new(pw, ph), RoofSpec::new(rw, rh))
    }

    #[test]
    fn test_unit_panels_cover_roof() {
        assert_eq!(count_panels(1, 1, 5, 5), 25);
    }

    #[test]
    fn test_exact_tiling_no_leftover() {
        assert_eq!(count_panels(2, 1, 4, 2), 4);
        assert_eq!(count_panels(1, 2, 2, 4), 4);
    }

    #[test]
    fn test_leftover_strip_is_filled() {
        // x=5, y=5, a=3, b=1: 1*5 in the grid plus 1*2 rotated in the 2-wide strip
        let result = calculate(&input(3, 1, 5, 5));
        assert_eq!(result.long_along_long, TilingCase { primary_grid: 5, strip_fill: 2 });
        assert_eq!(result.long_along_short, TilingCase { primary_grid: 5, strip_fill: 2 });
        assert_eq!(result.panel_count, 7);
    }

    #[test]
    fn test_three_by_five_roof() {
        // x=5, y=3, a=2, b=1
        let result = calculate(&input(1, 2, 3, 5));
        assert_eq!(result.long_along_long, TilingCase { primary_grid: 6, strip_fill: 1 });
        assert_eq!(result.long_along_short, TilingCase { primary_grid: 5, strip_fill: 2 });
        assert_eq!(result.panel_count, 7);
        assert_eq!(result.layout, Some(PanelLayout::LongAlongLong));
    }

    #[test]
    fn test_long_along_short_wins() {
        // x=7, y=5, a=3, b=2: 2*2 vs 3*1 + 2*1
        let result = calculate(&input(3, 2, 7, 5));
        assert_eq!(result.long_along_long.total(), 4);
        assert_eq!(result.long_along_short.total(), 5);
        assert_eq!(result.panel_count, 5);
        assert_eq!(result.layout, Some(PanelLayout::LongAlongShort));

        assert_eq!(count_panels(4, 3, 10, 7), 5);
    }

    #[test]
    fn test_panel_larger_than_roof() {
        let result = calculate(&input(2, 2, 1, 10));
        assert_eq!(result.panel_count, 0);
        assert_eq!(result.layout, None);
        assert_eq!(result.long_along_long.total() + result.long_along_short.total(), 0);
    }

    #[test]
    fn test_degenerate_inputs_yield_zero() {
        assert_eq!(count_panels(2, 1, 0, 5), 0);
        assert_eq!(count_panels(0, 1, 5, 5), 0);
        assert_eq!(count_panels(1, 1, 5, 0), 0);
        assert_eq!(count_panels(-2, 1, 5, 5), 0);
        assert_eq!(count_panels(2, 1, -4, -6), 0);
        assert_eq!(calculate(&input(0, 0, 0, 0)), PanelResult::default());
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let samples = [(3, 1, 5, 5), (1, 2, 3, 5), (3, 2, 7, 5), (4, 3, 10, 7), (5, 2, 13, 11)];
        for (a, b, x, y) in samples {
            let expected = count_panels(a, b, x, y);
            assert_eq!(count_panels(b, a, x, y), expected);
            assert_eq!(count_panels(a, b, y, x), expected);
            assert_eq!(count_panels(b, a, y, x), expected);
        }
    }

    #[test]
    fn test_repeat_calls_agree() {
        let first = calculate(&input(5, 2, 13, 11));
        let second = calculate(&input(5, 2, 13, 11));
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_never_exceeds_area_bound() {
        for pw in 1..6 {
            for ph in 1..6 {
                for rw in 0..12 {
                    for rh in 0..12 {
                        let count = count_panels(pw, ph, rw, rh);
                        let bound = (rw * rh) as u64 / (pw * ph) as u64;
                        assert!(
                            count <= bound,
                            "{pw}x{ph} on {rw}x{rh}: {count} panels exceed area bound {bound}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_large_dimensions_do_not_overflow() {
        assert_eq!(count_panels(1, 1, i32::MAX, i32::MAX), (i32::MAX as u64) * (i32::MAX as u64));
    }

    #[test]
    fn test_serialization() {
        let result = calculate(&input(1, 2, 3, 5));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"layout\":\"long_along_long\""));
        let roundtrip: PanelResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
