//! # u-loadplan Core
//!
//! Core types and traits for the u-loadplan cargo placement engine.
//!
//! This crate provides the value types shared between the centroid calculator,
//! the placers, and the consumers that render or report a load plan.
//!
//! ## Core Components
//!
//! - **Geometry traits**: `Geometry` for cargo bodies, `Boundary` for platforms
//! - **Solver trait**: Common interface for load planners
//! - **Results**: `Centroid`, `Placement`, `LoadPlan`
//! - **Footprints**: axis-aligned rectangles on the platform plane
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod centroid;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use centroid::Centroid;
pub use error::{Error, Result};
pub use footprint::Footprint;
pub use geometry::{Boundary, CargoId, Geometry};
pub use placement::{Placement, PlacementStats};
pub use result::{ItemAnnotation, LoadPlan};
pub use solver::{Config, Solver};
