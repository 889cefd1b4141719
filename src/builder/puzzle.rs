//! Fluent builder for puzzles.

use crate::builder::error::BuildError;
use crate::core::Peg;
use crate::solver::{solve, Solution};

/// Builder for a puzzle with a fluent API.
///
/// # Example
///
/// ```rust
/// use hanoi::builder::PuzzleBuilder;
///
/// let solution = PuzzleBuilder::new()
///     .source('A')
///     .helper('B')
///     .destination('C')
///     .disks(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(solution.len(), 7);
/// assert_eq!(solution.to_vec()[0].to_string(), "A -> C");
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleBuilder {
    source: Peg,
    helper: Peg,
    destination: Peg,
    disks: Option<i64>,
}

impl PuzzleBuilder {
    /// Create a builder with the default `X`/`Y`/`Z` pegs.
    pub fn new() -> Self {
        Self {
            source: Peg::X,
            helper: Peg::Y,
            destination: Peg::Z,
            disks: None,
        }
    }

    /// Set the source peg label.
    pub fn source(mut self, peg: impl Into<Peg>) -> Self {
        self.source = peg.into();
        self
    }

    /// Set the helper peg label.
    pub fn helper(mut self, peg: impl Into<Peg>) -> Self {
        self.helper = peg.into();
        self
    }

    /// Set the destination peg label.
    pub fn destination(mut self, peg: impl Into<Peg>) -> Self {
        self.destination = peg.into();
        self
    }

    /// Set the disk count (required). Validated on build.
    pub fn disks(mut self, disks: i64) -> Self {
        self.disks = Some(disks);
        self
    }

    /// Validate the configuration and return the solution.
    pub fn build(self) -> Result<Solution, BuildError> {
        let disks = self.disks.ok_or(BuildError::MissingDiskCount)?;
        Ok(solve(self.source, self.helper, self.destination, disks)?)
    }
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pegs;
    use crate::solver::SolveError;

    #[test]
    fn build_uses_default_pegs() {
        let solution = PuzzleBuilder::new().disks(2).build().unwrap();
        assert_eq!(solution.pegs(), Pegs::default());
        assert_eq!(solution.disks(), 2);
    }

    #[test]
    fn build_fails_without_disks() {
        let result = PuzzleBuilder::new().build();
        assert_eq!(result, Err(BuildError::MissingDiskCount));
    }

    #[test]
    fn build_reports_invalid_disk_count() {
        let result = PuzzleBuilder::new().disks(-1).build();
        assert_eq!(
            result,
            Err(BuildError::Solve(SolveError::InvalidDiskCount { disks: -1 }))
        );
    }

    #[test]
    fn build_reports_duplicate_pegs() {
        let result = PuzzleBuilder::new().helper('Z').disks(3).build();
        assert_eq!(
            result,
            Err(BuildError::Solve(SolveError::DuplicatePeg { peg: Peg::Z }))
        );
    }

    #[test]
    fn later_calls_override_earlier_ones() {
        let solution = PuzzleBuilder::new()
            .disks(1)
            .disks(4)
            .source('1')
            .helper('2')
            .destination('3')
            .build()
            .unwrap();

        assert_eq!(solution.disks(), 4);
        assert_eq!(solution.pegs().source(), Peg::new('1'));
    }

    #[test]
    fn build_error_message_passes_through() {
        let err = PuzzleBuilder::new().disks(0).build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal entry: disk count must be positive (got 0)"
        );
    }
}
