//! # u-loadplan
//!
//! Deterministic cargo placement and center-of-mass proposals for fixed-size
//! transport platforms.
//!
//! This crate provides:
//! - **Center of mass**: mass-weighted average of every item's half-extents
//! - **Shelf placement**: single-pass, row-wrapping placement in input order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use u_loadplan::{run, CargoItem, Platform};
//!
//! let cargo = vec![
//!     CargoItem::new("A", 2.0, 4.0, 2.0, 1.0),
//!     CargoItem::new("B", 3.0, 5.0, 2.0, 1.0),
//! ];
//!
//! let (centroid, placements) = run(&cargo, &Platform::standard())?;
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core traits and abstractions.
pub use u_loadplan_core as core;

/// Centroid calculation and shelf placement.
pub use u_loadplan_shelf as shelf;

// Re-export commonly used types at root level
pub use u_loadplan_core::{
    Centroid, Config, Error, Footprint, ItemAnnotation, LoadPlan, Placement, Result, Solver,
};
pub use u_loadplan_shelf::{collect_cargo, CargoItem, CargoSpec, Platform, ShelfPlacer};

/// Computes the centroid and the placements of one cargo set.
///
/// The centroid is computed first; every piece of working state lives inside
/// this call, so independent runs can proceed in parallel.
pub fn run(cargo: &[CargoItem], platform: &Platform) -> Result<(Centroid, Vec<Placement>)> {
    let centroid = u_loadplan_shelf::compute_centroid(cargo)?;
    let placements = u_loadplan_shelf::place_cargo(cargo, platform)?;
    Ok((centroid, placements))
}

/// Computes a full [`LoadPlan`] with the given configuration.
pub fn plan(cargo: &[CargoItem], platform: &Platform, config: Config) -> Result<LoadPlan> {
    ShelfPlacer::new(config).solve(cargo, platform)
}
