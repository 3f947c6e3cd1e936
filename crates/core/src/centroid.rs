//! Center-of-mass representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mass-weighted center of a cargo set.
///
/// Each item contributes its own geometric center measured from its reference
/// corner, so the value does not depend on where items end up on the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Centroid {
    /// Coordinate along the length axis.
    pub x: f64,
    /// Coordinate along the width axis.
    pub y: f64,
    /// Coordinate along the height axis.
    pub z: f64,
}

impl Centroid {
    /// Creates a new centroid.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the projection onto the platform plane.
    pub fn projection(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
