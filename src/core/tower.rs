//! Simulated tower used to check move sequences against the Hanoi rule.
//!
//! The generator itself never looks at disks. `Tower` is the other half:
//! it tracks which disk sits where and rejects any move that would put a
//! larger disk on a smaller one.

use super::moves::Move;
use super::peg::{Peg, Pegs};
use crate::solver::Solution;
use tracing::trace;

/// Errors raised while replaying moves on a [`Tower`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TowerError {
    #[error("Peg '{peg}' is not part of this tower")]
    UnknownPeg { peg: Peg },

    #[error("Move from '{peg}' to itself")]
    SamePeg { peg: Peg },

    #[error("Peg '{peg}' has no disk to move")]
    EmptyPeg { peg: Peg },

    #[error("Disk {disk} cannot be placed on smaller disk {onto} at peg '{peg}'")]
    LargerOnSmaller { disk: u32, onto: u32, peg: Peg },

    #[error("Tower is not solved: {remaining} disk(s) left off peg '{destination}'")]
    Unsolved { remaining: usize, destination: Peg },
}

/// Three stacks of disks, bottom first. Disk sizes run from 1 (smallest)
/// to the disk count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tower {
    pegs: Pegs,
    stacks: [Vec<u32>; 3],
    disks: u32,
}

impl Tower {
    /// Create a tower with `disks` disks stacked on the source peg.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::{Move, Peg, Pegs, Tower};
    ///
    /// let mut tower = Tower::new(Pegs::default(), 2);
    /// assert_eq!(tower.disks_on(Peg::X), Some(&[2, 1][..]));
    ///
    /// tower.apply(Move::new(Peg::X, Peg::Y)).unwrap();
    /// assert!(tower.apply(Move::new(Peg::X, Peg::Y)).is_err());
    /// ```
    pub fn new(pegs: Pegs, disks: u32) -> Self {
        Self {
            pegs,
            stacks: [(1..=disks).rev().collect(), Vec::new(), Vec::new()],
            disks,
        }
    }

    /// Replay every move of `solution` on a fresh tower.
    ///
    /// Returns the final tower, which is guaranteed to be solved.
    pub fn replay(solution: &Solution) -> Result<Self, TowerError> {
        let mut tower = Self::new(solution.pegs(), solution.disks());
        solution.try_for_each(|mv| tower.apply(mv))?;

        if !tower.is_solved() {
            return Err(TowerError::Unsolved {
                remaining: tower.disks as usize - tower.stacks[2].len(),
                destination: tower.pegs.destination(),
            });
        }
        Ok(tower)
    }

    pub fn pegs(&self) -> Pegs {
        self.pegs
    }

    /// Disks on `peg`, bottom first, or `None` for a foreign label.
    pub fn disks_on(&self, peg: Peg) -> Option<&[u32]> {
        self.pegs.position(peg).map(|i| self.stacks[i].as_slice())
    }

    /// Move the top disk, enforcing the Hanoi rule.
    pub fn apply(&mut self, mv: Move) -> Result<(), TowerError> {
        let from = self.index_of(mv.from)?;
        let to = self.index_of(mv.to)?;
        if from == to {
            return Err(TowerError::SamePeg { peg: mv.from });
        }

        let disk = *self.stacks[from]
            .last()
            .ok_or(TowerError::EmptyPeg { peg: mv.from })?;
        if let Some(&onto) = self.stacks[to].last() {
            if onto < disk {
                return Err(TowerError::LargerOnSmaller {
                    disk,
                    onto,
                    peg: mv.to,
                });
            }
        }

        self.stacks[from].pop();
        self.stacks[to].push(disk);
        trace!(disk, %mv, "applied move");
        Ok(())
    }

    /// All disks sit on the destination peg.
    pub fn is_solved(&self) -> bool {
        self.stacks[2].len() == self.disks as usize
    }

    fn index_of(&self, peg: Peg) -> Result<usize, TowerError> {
        self.pegs
            .position(peg)
            .ok_or(TowerError::UnknownPeg { peg })
    }
}
