//! Single-disk moves.

use super::peg::Peg;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction to move the top disk of `from` onto `to`.
///
/// Moves are plain values; the generator emits them in the order they
/// must be performed and never stores them itself.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, Peg};
///
/// let mv = Move::new(Peg::X, Peg::Z);
/// assert_eq!(mv.to_string(), "X -> Z");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    /// Peg the disk is taken from
    pub from: Peg,
    /// Peg the disk is placed on
    pub to: Peg,
}

impl Move {
    pub const fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
