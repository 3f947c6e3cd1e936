//! Error types for u-loadplan.

use thiserror::Error;

/// Result type alias for u-loadplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a load plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The cargo set is empty, contains a duplicate name, or an item has a
    /// non-positive or non-finite mass or dimension.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Total cargo mass is zero, so no center of mass exists.
    #[error("Division by zero: total cargo mass is zero")]
    DivisionByZero,

    /// Invalid platform provided.
    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),
}

impl Error {
    /// Returns true for errors caused by the cargo set itself.
    ///
    /// `DivisionByZero` counts as invalid input: a zero total mass can only
    /// come from a cargo set that should have been rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::DivisionByZero)
    }
}
