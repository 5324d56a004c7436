//! # Geometry Types
//!
//! Rectangles on the integer grid. Panels and roofs are both just a
//! width/height pair, but they are kept as separate newtypes so a call site
//! cannot swap the two by accident.
//!
//! Orientation never matters to callers: every pair is normalized to
//! `(long, short)` before the tiling math looks at it.
//!
//! ## Example
//!
//! ```rust
//! use panel_core::geometry::{PanelSpec, RoofSpec};
//!
//! let panel = PanelSpec::new(1, 2);
//! let roof = RoofSpec::new(5, 3);
//! assert_eq!(panel.dimensions().normalized(), (2, 1));
//! assert_eq!(roof.dimensions().normalized(), (5, 3));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A width/height pair in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub const fn new(width: i32, height: i32) -> Self {
        Dimensions { width, height }
    }

    /// The larger of the two sides.
    pub fn long_side(&self) -> i32 {
        self.width.max(self.height)
    }

    /// The smaller of the two sides.
    pub fn short_side(&self) -> i32 {
        self.width.min(self.height)
    }

    /// `(long, short)`, independent of how the pair was given.
    pub fn normalized(&self) -> (i32, i32) {
        (self.long_side(), self.short_side())
    }

    /// True when either side is zero or negative. Nothing fits on, or is
    /// placed as, a degenerate rectangle.
    pub fn is_degenerate(&self) -> bool {
        self.short_side() <= 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Size of a single solar panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelSpec(pub Dimensions);

impl PanelSpec {
    pub const fn new(width: i32, height: i32) -> Self {
        PanelSpec(Dimensions::new(width, height))
    }

    pub fn dimensions(&self) -> Dimensions {
        self.0
    }
}

impl fmt::Display for PanelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Size of the roof area panels are tiled onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoofSpec(pub Dimensions);

impl RoofSpec {
    pub const fn new(width: i32, height: i32) -> Self {
        RoofSpec(Dimensions::new(width, height))
    }

    pub fn dimensions(&self) -> Dimensions {
        self.0
    }
}

impl fmt::Display for RoofSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
