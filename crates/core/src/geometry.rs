//! Geometry and boundary traits shared by cargo items and platforms.

use nalgebra::Vector3;

use crate::footprint::Footprint;
use crate::Result;

/// Identifier of a cargo item. Unique within one placement run.
pub type CargoId = String;

/// A rigid cargo body with a fixed orientation.
///
/// Extents are ordered (length, width, height). Length and width span the
/// platform footprint; height is only used for the center of mass.
pub trait Geometry {
    /// Returns the item's identifier.
    fn id(&self) -> &CargoId;

    /// Returns the item's mass.
    fn mass(&self) -> f64;

    /// Returns the bounding box extents (length, width, height).
    fn extents(&self) -> Vector3<f64>;

    /// Validates the item's physical invariants.
    fn validate(&self) -> Result<()>;

    /// Returns the half-extents, i.e. the geometric center relative to the
    /// item's reference corner.
    fn half_extents(&self) -> Vector3<f64> {
        self.extents() / 2.0
    }

    /// Returns the footprint length (along the platform's x axis).
    fn length(&self) -> f64 {
        self.extents().x
    }

    /// Returns the footprint width (along the platform's y axis).
    fn width(&self) -> f64 {
        self.extents().y
    }
}

/// A rectangular loading surface.
pub trait Boundary {
    /// Returns the footprint width (x extent).
    fn width(&self) -> f64;

    /// Returns the footprint height (y extent).
    fn height(&self) -> f64;

    /// Validates the boundary.
    fn validate(&self) -> Result<()>;

    /// Returns the footprint area.
    fn measure(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the boundary as a footprint anchored at the origin.
    fn footprint(&self) -> Footprint {
        Footprint::new(0.0, 0.0, self.width(), self.height())
    }

    /// Checks whether a footprint lies entirely on the surface.
    fn contains(&self, footprint: &Footprint) -> bool {
        self.footprint().contains(footprint)
    }
}
