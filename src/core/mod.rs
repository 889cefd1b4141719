//! Core puzzle types.
//!
//! This module contains the plain values the rest of the crate passes
//! around:
//! - `Peg` labels and the `Pegs` role triple
//! - `Move` instructions
//! - A `Tower` simulator that checks moves against the Hanoi rule
//!
//! Nothing here performs I/O.

mod moves;
mod peg;
mod tower;

pub use moves::Move;
pub use peg::{Peg, Pegs};
pub use tower::{Tower, TowerError};
