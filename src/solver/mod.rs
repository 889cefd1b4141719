//! Recursive move generation.
//!
//! [`solve`] validates its inputs and returns a [`Solution`]. A solution is
//! a small `Copy` value; moves are produced only when it is consumed, and
//! it can be consumed as many times as needed:
//!
//! ```rust
//! use hanoi::core::{Move, Peg};
//! use hanoi::solver::solve;
//!
//! let solution = solve(Peg::X, Peg::Y, Peg::Z, 2).unwrap();
//! assert_eq!(solution.len(), 3);
//! assert_eq!(
//!     solution.to_vec(),
//!     vec![
//!         Move::new(Peg::X, Peg::Y),
//!         Move::new(Peg::X, Peg::Z),
//!         Move::new(Peg::Y, Peg::Z),
//!     ]
//! );
//! ```

pub mod error;

pub use error::SolveError;

use crate::core::{Move, Peg, Pegs};
use std::convert::Infallible;
use tracing::{debug, trace};

/// Largest supported disk count. `2^64 - 1` moves is the most a `u64` can count.
pub const MAX_DISKS: u32 = 64;

/// Validate a puzzle and return its (not yet generated) solution.
///
/// Fails with [`SolveError::InvalidDiskCount`] when `disks <= 0`,
/// [`SolveError::TooManyDisks`] above [`MAX_DISKS`] and
/// [`SolveError::DuplicatePeg`] when two pegs share a label.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Peg;
/// use hanoi::solver::{solve, SolveError};
///
/// assert_eq!(
///     solve(Peg::X, Peg::Y, Peg::Z, 0).unwrap_err(),
///     SolveError::InvalidDiskCount { disks: 0 }
/// );
/// ```
pub fn solve(
    source: Peg,
    helper: Peg,
    destination: Peg,
    disks: i64,
) -> Result<Solution, SolveError> {
    if disks <= 0 {
        return Err(SolveError::InvalidDiskCount { disks });
    }
    let disks = u32::try_from(disks)
        .ok()
        .filter(|&n| n <= MAX_DISKS)
        .ok_or(SolveError::TooManyDisks {
            disks,
            max: MAX_DISKS,
        })?;
    let pegs = Pegs::new(source, helper, destination)?;

    debug!(disks, %source, %helper, %destination, "puzzle validated");
    Ok(Solution { pegs, disks })
}

/// The move sequence for one validated puzzle.
///
/// Holds only the pegs and the disk count, so it is cheap to copy and
/// every consumption restarts from the first move.
///
/// Moves are pushed into a callback rather than pulled through an
/// `Iterator`. To stop early (taking a prefix, say), return an error from
/// the [`Solution::try_for_each`] callback once enough moves have been seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pegs: Pegs,
    disks: u32,
}

impl Solution {
    pub fn pegs(&self) -> Pegs {
        self.pegs
    }

    /// Number of disks, always in `1..=MAX_DISKS`.
    pub fn disks(&self) -> u32 {
        self.disks
    }

    /// Total number of moves, `2^disks - 1`.
    pub fn len(&self) -> u64 {
        u64::MAX >> (64 - self.disks)
    }

    /// Always `false`; a valid puzzle has at least one disk.
    pub fn is_empty(&self) -> bool {
        self.disks == 0
    }

    /// Feed every move, in order, to `f`.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Move),
    {
        let result: Result<(), Infallible> = self.try_for_each(|mv| {
            f(mv);
            Ok(())
        });
        if let Err(never) = result {
            match never {}
        }
    }

    /// Feed every move, in order, to `f`, stopping at the first error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::Peg;
    /// use hanoi::solver::solve;
    ///
    /// let solution = solve(Peg::X, Peg::Y, Peg::Z, 3).unwrap();
    ///
    /// let mut seen = 0;
    /// let result = solution.try_for_each(|_| {
    ///     seen += 1;
    ///     if seen == 2 { Err("stop") } else { Ok(()) }
    /// });
    ///
    /// assert_eq!(result, Err("stop"));
    /// assert_eq!(seen, 2);
    /// ```
    pub fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Move) -> Result<(), E>,
    {
        let pegs = self.pegs;
        emit(
            pegs.source(),
            pegs.helper(),
            pegs.destination(),
            self.disks,
            &mut f,
        )
    }

    /// Collect the moves into a vector.
    pub fn to_vec(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.for_each(|mv| moves.push(mv));
        moves
    }
}

/// Move `disks` disks from `source` to `destination` via `helper`.
/// Recursion depth equals `disks`, which is at least 1.
fn emit<E, F>(
    source: Peg,
    helper: Peg,
    destination: Peg,
    disks: u32,
    f: &mut F,
) -> Result<(), E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    if disks <= 1 {
        trace!(%source, %destination, "move");
        return f(Move::new(source, destination));
    }

    emit(source, destination, helper, disks - 1, f)?;
    trace!(%source, %destination, "move");
    f(Move::new(source, destination))?;
    emit(helper, source, destination, disks - 1, f)
}
