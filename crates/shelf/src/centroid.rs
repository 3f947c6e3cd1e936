//! Center-of-mass calculation for a cargo set.

use nalgebra::Vector3;
use u_loadplan_core::geometry::Geometry;
use u_loadplan_core::{Centroid, Error, Result};

use crate::cargo::validate_cargo;

/// Computes the mass-weighted center of a cargo set.
///
/// Each item contributes its half-extents, i.e. its geometric center measured
/// from its own reference corner. The result is independent of item order and
/// of where items are later placed.
pub fn compute_centroid<G: Geometry>(cargo: &[G]) -> Result<Centroid> {
    validate_cargo(cargo)?;

    let (total_mass, weighted) = cargo.iter().fold(
        (0.0_f64, Vector3::<f64>::zeros()),
        |(mass, weighted), item| {
            (
                mass + item.mass(),
                weighted + item.half_extents() * item.mass(),
            )
        },
    );

    if total_mass <= 0.0 {
        return Err(Error::DivisionByZero);
    }

    let center = weighted / total_mass;
    if !total_mass.is_finite() || center.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "mass-weighted sums overflow for {} items (total mass {})",
            cargo.len(),
            total_mass
        )));
    }

    Ok(Centroid::new(center.x, center.y, center.z))
}
