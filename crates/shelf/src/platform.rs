//! Platform types.

use u_loadplan_core::geometry::Boundary;
use u_loadplan_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed rectangular transport platform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Platform {
    /// Extent along the row direction (x).
    width: f64,

    /// Extent across rows (y).
    height: f64,
}

impl Platform {
    /// Footprint width of the standard platform.
    pub const STANDARD_WIDTH: f64 = 13.4;

    /// Footprint height of the standard platform.
    pub const STANDARD_HEIGHT: f64 = 2.72;

    /// Creates a new platform with the given footprint.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates the standard 13.4 x 2.72 platform.
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_WIDTH, Self::STANDARD_HEIGHT)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::standard()
    }
}

impl Boundary for Platform {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(Error::InvalidPlatform(format!(
                "Footprint must be positive and finite, got {} x {}",
                self.width, self.height
            )));
        }

        Ok(())
    }
}
