use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported at the calculator boundary.
///
/// Hitting a network or result cap is not an error: those lists are truncated silently and the
/// true count is reported alongside them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Target resistance must be greater than 0 (got {0})")]
    InvalidTarget(f64),

    #[error("Tolerance must be a non-negative percentage (got {0})")]
    InvalidTolerance(f64),

    #[error("Select at least one resistor value")]
    NoAvailableValues,

    #[error("Resistor values must be greater than 0 (got {0})")]
    InvalidValue(f64),

    #[error("Ladder resolution must be between 2 and 24 bits (got {0})")]
    InvalidBits(u32),

    #[error("Memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[cfg(feature = "expr_builder")]
    #[error("Invalid target expression: {0}")]
    Expression(String),
}

pub type Result<T> = std::result::Result<T, Error>;
