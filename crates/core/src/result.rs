//! Load plan representation.

use crate::centroid::Centroid;
use crate::footprint::Footprint;
use crate::geometry::CargoId;
use crate::placement::{Placement, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Annotation data for one placed item, in the order items were assigned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemAnnotation {
    /// 1-based display number.
    pub number: usize,
    /// Cargo item name.
    pub cargo_id: CargoId,
    /// Occupied rectangle.
    pub footprint: Footprint,
}

/// Result of planning one cargo set on one platform.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadPlan {
    /// Mass-weighted center of the cargo set.
    pub centroid: Centroid,

    /// One placement per cargo item, in input order.
    pub placements: Vec<Placement>,

    /// Externally chosen label for the proposed arrangement.
    pub option_label: Option<String>,

    /// Number of rows that received at least one item.
    pub rows_used: usize,

    /// Placed footprint area divided by platform area.
    /// Exceeds 1.0 when items spill past the platform.
    pub utilization: f64,

    /// IDs of items whose footprint is not contained in the platform.
    pub out_of_bounds: Vec<CargoId>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl LoadPlan {
    /// Creates a plan with the given centroid and placements.
    ///
    /// Summary fields start zeroed; solvers fill them in.
    pub fn new(centroid: Centroid, placements: Vec<Placement>) -> Self {
        Self {
            centroid,
            placements,
            option_label: None,
            rows_used: 0,
            utilization: 0.0,
            out_of_bounds: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if every item lies on the platform.
    pub fn all_within_bounds(&self) -> bool {
        self.out_of_bounds.is_empty()
    }

    /// Returns the placement of the named item.
    pub fn placement(&self, cargo_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.cargo_id == cargo_id)
    }

    /// Returns the centroid's projection onto the platform plane.
    pub fn centroid_projection(&self) -> (f64, f64) {
        self.centroid.projection()
    }

    /// Returns numbered footprints for every placed item.
    pub fn annotations(&self) -> Vec<ItemAnnotation> {
        self.placements
            .iter()
            .map(|p| ItemAnnotation {
                number: p.number(),
                cargo_id: p.cargo_id.clone(),
                footprint: p.footprint(),
            })
            .collect()
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }
}
