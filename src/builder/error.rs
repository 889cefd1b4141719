//! Build errors for the puzzle builder.

use crate::solver::SolveError;
use thiserror::Error;

/// Errors that can occur when building a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Disk count not specified. Call .disks(n) before .build()")]
    MissingDiskCount,

    #[error(transparent)]
    Solve(#[from] SolveError),
}
