//! Reading the disk count and rendering solutions.
//!
//! The text writers reproduce the classic transcript:
//!
//! ```text
//! Input the number of disks: 2
//!
//! Tower of Hanoi for 2 disks:
//! Move Disk from X to Y
//! Move Disk from X to Z
//! Move Disk from Y to Z
//! ```
//!
//! [`Transcript`] is the serializable form of the same information. Its
//! moves are streamed into the serializer as they are generated, so a JSON
//! transcript never holds the whole move list in memory.

use crate::solver::Solution;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use std::io::{BufRead, Write};

pub mod error;

pub use error::TranscriptError;

/// Prompt printed before reading the disk count.
pub const PROMPT: &str = "Input the number of disks: ";

/// Message printed for a zero or negative disk count.
pub const ILLEGAL_ENTRY: &str = "Illegal entry";

/// Read a (possibly negative) disk count from `input`.
///
/// Blank lines are skipped; the first non-blank line must hold a single
/// integer, surrounding whitespace aside.
///
/// # Example
///
/// ```rust
/// use hanoi::transcript::read_disk_count;
///
/// assert_eq!(read_disk_count(&b"  3\n"[..]).unwrap(), 3);
/// assert_eq!(read_disk_count(&b"\n\n-5\n"[..]).unwrap(), -5);
/// assert!(read_disk_count(&b"three\n"[..]).is_err());
/// ```
pub fn read_disk_count<R: BufRead>(mut input: R) -> Result<i64, TranscriptError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(TranscriptError::MissingInput);
        }
        if !line.trim().is_empty() {
            break;
        }
    }

    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| TranscriptError::InvalidInput {
            input: trimmed.to_string(),
        })
}

/// Write the blank line and heading that precede the moves.
pub fn write_header<W: Write>(out: &mut W, disks: i64) -> Result<(), TranscriptError> {
    writeln!(out)?;
    writeln!(out, "Tower of Hanoi for {disks} disks:")?;
    Ok(())
}

/// Write one `Move Disk from <from> to <to>` line per move.
pub fn write_moves<W: Write>(out: &mut W, solution: &Solution) -> Result<(), TranscriptError> {
    solution.try_for_each(|mv| writeln!(out, "Move Disk from {} to {}", mv.from, mv.to))?;
    Ok(())
}

pub fn write_illegal_entry<W: Write>(out: &mut W) -> Result<(), TranscriptError> {
    writeln!(out, "{ILLEGAL_ENTRY}")?;
    Ok(())
}

/// Serializable record of one solve.
///
/// Serializes as `{ "disks", "pegs", "move_count", "moves" }`. The moves
/// are generated while the `moves` array is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transcript<'a> {
    solution: &'a Solution,
}

impl<'a> Transcript<'a> {
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl Serialize for Transcript<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Transcript", 4)?;
        record.serialize_field("disks", &self.solution.disks())?;
        record.serialize_field("pegs", &self.solution.pegs())?;
        record.serialize_field("move_count", &self.solution.len())?;
        record.serialize_field("moves", &MoveStream(self.solution))?;
        record.end()
    }
}

/// Serializes a solution's moves as a sequence without collecting them.
struct MoveStream<'a>(&'a Solution);

impl Serialize for MoveStream<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(usize::try_from(self.0.len()).ok())?;
        self.0.try_for_each(|mv| seq.serialize_element(&mv))?;
        seq.end()
    }
}

/// Write `transcript` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(
    out: &mut W,
    transcript: &Transcript<'_>,
) -> Result<(), TranscriptError> {
    serde_json::to_writer_pretty(&mut *out, transcript)?;
    writeln!(out)?;
    Ok(())
}
