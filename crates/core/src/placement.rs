//! Placement representation for positioned cargo items.

use std::collections::BTreeMap;

use crate::footprint::Footprint;
use crate::geometry::CargoId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position assigned to one cargo item on the platform footprint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed cargo item.
    pub cargo_id: CargoId,

    /// Index (0-based) of the item in the input sequence.
    pub index: usize,

    /// Row (shelf) the item was placed in, 0-based.
    pub row: usize,

    /// X coordinate of the lower-left corner.
    pub x: f64,

    /// Y coordinate of the lower-left corner (the row baseline).
    pub y: f64,

    /// Extent along x.
    pub length: f64,

    /// Extent along y.
    pub width: f64,
}

impl Placement {
    /// Creates a new placement for an item of the given footprint extents.
    pub fn new(
        cargo_id: impl Into<CargoId>,
        index: usize,
        x: f64,
        y: f64,
        length: f64,
        width: f64,
    ) -> Self {
        Self {
            cargo_id: cargo_id.into(),
            index,
            row: 0,
            x,
            y,
            length,
            width,
        }
    }

    /// Sets the row index.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    /// Returns the lower-left corner.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the 1-based display number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Returns the occupied rectangle.
    pub fn footprint(&self) -> Footprint {
        Footprint::from_corner(self.x, self.y, self.length, self.width)
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of items per row.
    pub row_distribution: BTreeMap<usize, usize>,
    /// Right edge of the last item in each row.
    pub row_lengths: BTreeMap<usize, f64>,
    /// Summed footprint area.
    pub total_area: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            *stats.row_distribution.entry(p.row).or_insert(0) += 1;

            let end = stats.row_lengths.entry(p.row).or_insert(0.0);
            *end = end.max(p.x + p.length);

            stats.total_area += p.length * p.width;
        }

        stats
    }

    /// Returns the number of rows that received at least one item.
    pub fn rows_used(&self) -> usize {
        self.row_distribution.len()
    }
}
