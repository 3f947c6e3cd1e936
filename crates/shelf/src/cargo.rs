//! Cargo item types.

use std::collections::HashSet;

use nalgebra::Vector3;
use u_loadplan_core::geometry::{CargoId, Geometry};
use u_loadplan_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical attributes of one cargo item, as supplied by an input loader.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoSpec {
    /// Mass.
    pub mass: f64,
    /// Extent along the platform's x axis.
    pub length: f64,
    /// Extent along the platform's y axis.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl CargoSpec {
    /// Creates a new attribute record.
    pub fn new(mass: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            mass,
            length,
            width,
            height,
        }
    }
}

/// A rectangular cargo item in a fixed orientation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoItem {
    /// Unique identifier.
    id: CargoId,

    /// Mass.
    mass: f64,

    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,
}

impl CargoItem {
    /// Creates a new cargo item with the given ID, mass and dimensions.
    pub fn new(id: impl Into<CargoId>, mass: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            mass,
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// Creates a cargo item from a loader record.
    pub fn from_spec(id: impl Into<CargoId>, spec: &CargoSpec) -> Self {
        Self::new(id, spec.mass, spec.length, spec.width, spec.height)
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }
}

impl Geometry for CargoItem {
    fn id(&self) -> &CargoId {
        &self.id
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn extents(&self) -> Vector3<f64> {
        self.dimensions
    }

    fn validate(&self) -> Result<()> {
        if !is_positive(self.mass) {
            return Err(Error::InvalidInput(format!(
                "Mass for '{}' must be positive, got {}",
                self.id, self.mass
            )));
        }

        for (axis, value) in ["length", "width", "height"].iter().zip(self.dimensions.iter()) {
            if !is_positive(*value) {
                return Err(Error::InvalidInput(format!(
                    "The {} of '{}' must be positive, got {}",
                    axis, self.id, value
                )));
            }
        }

        Ok(())
    }
}

/// True for finite values strictly greater than zero. NaN fails.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Validates a whole cargo set: non-empty, valid items, unique names.
pub fn validate_cargo<G: Geometry>(cargo: &[G]) -> Result<()> {
    if cargo.is_empty() {
        return Err(Error::InvalidInput("cargo set is empty".into()));
    }

    let mut seen = HashSet::with_capacity(cargo.len());
    for item in cargo {
        item.validate()?;
        if !seen.insert(item.id()) {
            return Err(Error::InvalidInput(format!(
                "duplicate cargo name '{}'",
                item.id()
            )));
        }
    }

    Ok(())
}

/// Builds an ordered cargo set from `(name, attributes)` records.
///
/// Iteration order of `records` becomes placement order.
pub fn collect_cargo<I, K>(records: I) -> Result<Vec<CargoItem>>
where
    I: IntoIterator<Item = (K, CargoSpec)>,
    K: Into<CargoId>,
{
    let cargo: Vec<CargoItem> = records
        .into_iter()
        .map(|(name, spec)| CargoItem::from_spec(name, &spec))
        .collect();

    validate_cargo(&cargo)?;
    Ok(cargo)
}
