//! # u-loadplan Shelf
//!
//! Center-of-mass calculation and greedy shelf placement of cargo on a
//! fixed transport platform.
//!
//! The centroid and the placement are computed independently: the centroid
//! only annotates the plan and never steers where items go.

pub mod cargo;
pub mod centroid;
pub mod placer;
pub mod platform;

// Re-exports
pub use cargo::{collect_cargo, validate_cargo, CargoItem, CargoSpec};
pub use centroid::compute_centroid;
pub use placer::{place_cargo, ShelfPlacer};
pub use platform::Platform;
pub use u_loadplan_core::{
    Centroid, Config, Error, Footprint, LoadPlan, Placement, Result, Solver,
};
