//! Solver trait and configuration.

use crate::geometry::{Boundary, Geometry};
use crate::result::LoadPlan;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for solvers.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Label of the arrangement chosen by the caller, passed through to the
    /// plan untouched.
    pub option_label: Option<String>,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the option label.
    pub fn with_option_label(mut self, label: impl Into<String>) -> Self {
        self.option_label = Some(label.into());
        self
    }
}

/// Trait for load planners.
pub trait Solver {
    /// The cargo type this solver handles.
    type Cargo: Geometry;
    /// The platform type this solver handles.
    type Platform: Boundary;

    /// Computes the center of mass and a position for every cargo item.
    fn solve(&self, cargo: &[Self::Cargo], platform: &Self::Platform) -> Result<LoadPlan>;
}
