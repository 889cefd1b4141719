//! Hanoi: a recursive Tower of Hanoi solver
//!
//! Given a disk count and three labeled pegs, the crate produces the
//! sequence of single-disk moves that carries every disk from the source
//! peg to the destination peg without ever putting a larger disk on a
//! smaller one.
//!
//! Move generation is kept apart from presentation: [`solve`] returns a
//! [`Solution`] that yields moves on demand, and callers decide whether to
//! print, collect or count them.
//!
//! # Core Concepts
//!
//! - **Peg**: a symbolic label; `Pegs` assigns the source, helper and destination roles
//! - **Move**: "move the top disk from one peg to another"
//! - **Solution**: the validated, restartable move sequence for one puzzle
//! - **Tower**: a simulator that replays moves under the Hanoi rule
//!
//! # Example
//!
//! ```rust
//! use hanoi::core::{Peg, Tower};
//! use hanoi::solve;
//!
//! let solution = solve(Peg::X, Peg::Y, Peg::Z, 3).unwrap();
//! assert_eq!(solution.len(), 7);
//!
//! let moves: Vec<String> = solution.to_vec().iter().map(|m| m.to_string()).collect();
//! assert_eq!(moves[0], "X -> Z");
//!
//! let tower = Tower::replay(&solution).unwrap();
//! assert!(tower.is_solved());
//! ```

pub mod builder;
pub mod core;
pub mod solver;
pub mod transcript;

// Re-export commonly used types
pub use crate::builder::{BuildError, PuzzleBuilder};
pub use crate::core::{Move, Peg, Pegs, Tower, TowerError};
pub use crate::solver::{solve, Solution, SolveError, MAX_DISKS};
