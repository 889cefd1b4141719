//! Builder API for configuring a puzzle.
//!
//! The builder is the configuration surface of the crate: peg labels
//! default to `X`, `Y` and `Z`, and only the disk count is required.

pub mod error;
pub mod puzzle;

pub use error::BuildError;
pub use puzzle::PuzzleBuilder;
