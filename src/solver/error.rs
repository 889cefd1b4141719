//! Errors for puzzle validation.

use crate::core::Peg;
use thiserror::Error;

/// Errors that can occur when setting up a puzzle to solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Disk count was zero or negative
    #[error("Illegal entry: disk count must be positive (got {disks})")]
    InvalidDiskCount { disks: i64 },

    /// Disk count would overflow the move total
    #[error("Too many disks: {disks} exceeds the maximum of {max}")]
    TooManyDisks { disks: i64, max: u32 },

    /// Two of the three pegs share a label
    #[error("Peg '{peg}' is used for more than one role")]
    DuplicatePeg { peg: Peg },
}
