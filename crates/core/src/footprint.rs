//! Axis-aligned footprint rectangles on the platform plane.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in platform coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl Footprint {
    /// Creates a new footprint from min/max coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a footprint from its lower-left corner and extents.
    pub fn from_corner(x: f64, y: f64, length: f64, width: f64) -> Self {
        Self::new(x, y, x + length, y + width)
    }

    /// Returns the x extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the y extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Checks if `other` lies entirely within this footprint.
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Checks if two footprints share interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}
