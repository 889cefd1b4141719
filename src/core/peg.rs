//! Peg labels and the source/helper/destination triple.

use crate::solver::SolveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic label naming one of the three pegs.
///
/// Pegs carry no state of their own. The move generator only ever
/// passes labels around; which disks sit where is never inspected.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Peg;
///
/// let peg = Peg::new('A');
/// assert_eq!(peg.label(), 'A');
/// assert_eq!(peg.to_string(), "A");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Peg(char);

impl Peg {
    /// Default source peg.
    pub const X: Peg = Peg('X');
    /// Default helper peg.
    pub const Y: Peg = Peg('Y');
    /// Default destination peg.
    pub const Z: Peg = Peg('Z');

    pub const fn new(label: char) -> Self {
        Peg(label)
    }

    pub const fn label(self) -> char {
        self.0
    }
}

impl From<char> for Peg {
    fn from(label: char) -> Self {
        Peg(label)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three pegs of a puzzle, in their roles.
///
/// A `Pegs` value always holds three distinct labels; construction
/// through [`Pegs::new`] rejects duplicates.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Peg, Pegs};
///
/// let pegs = Pegs::new(Peg::new('A'), Peg::new('B'), Peg::new('C')).unwrap();
/// assert_eq!(pegs.source(), Peg::new('A'));
///
/// assert!(Pegs::new(Peg::X, Peg::X, Peg::Z).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawPegs")]
pub struct Pegs {
    source: Peg,
    helper: Peg,
    destination: Peg,
}

impl Pegs {
    /// Create a peg triple, failing if any two labels are equal.
    pub fn new(source: Peg, helper: Peg, destination: Peg) -> Result<Self, SolveError> {
        if source == helper || source == destination {
            return Err(SolveError::DuplicatePeg { peg: source });
        }
        if helper == destination {
            return Err(SolveError::DuplicatePeg { peg: helper });
        }

        Ok(Self {
            source,
            helper,
            destination,
        })
    }

    pub fn source(&self) -> Peg {
        self.source
    }

    pub fn helper(&self) -> Peg {
        self.helper
    }

    pub fn destination(&self) -> Peg {
        self.destination
    }

    /// Labels in `[source, helper, destination]` order.
    pub fn as_array(&self) -> [Peg; 3] {
        [self.source, self.helper, self.destination]
    }

    /// Index of `peg` within [`Pegs::as_array`], if it is one of the three.
    pub fn position(&self, peg: Peg) -> Option<usize> {
        self.as_array().iter().position(|&p| p == peg)
    }

    pub fn contains(&self, peg: Peg) -> bool {
        self.position(peg).is_some()
    }
}

/// Unvalidated form used while deserializing.
#[derive(Deserialize)]
struct RawPegs {
    source: Peg,
    helper: Peg,
    destination: Peg,
}

impl TryFrom<RawPegs> for Pegs {
    type Error = SolveError;

    fn try_from(raw: RawPegs) -> Result<Self, Self::Error> {
        Pegs::new(raw.source, raw.helper, raw.destination)
    }
}

impl Default for Pegs {
    fn default() -> Self {
        Self {
            source: Peg::X,
            helper: Peg::Y,
            destination: Peg::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peg_displays_its_label() {
        assert_eq!(Peg::X.to_string(), "X");
        assert_eq!(Peg::new('7').to_string(), "7");
    }

    #[test]
    fn peg_from_char() {
        let peg: Peg = 'Q'.into();
        assert_eq!(peg, Peg::new('Q'));
    }

    #[test]
    fn default_pegs_are_x_y_z() {
        let pegs = Pegs::default();
        assert_eq!(pegs.as_array(), [Peg::X, Peg::Y, Peg::Z]);
    }

    #[test]
    fn new_accepts_distinct_labels() {
        let pegs = Pegs::new(Peg::new('A'), Peg::new('B'), Peg::new('C')).unwrap();
        assert_eq!(pegs.source(), Peg::new('A'));
        assert_eq!(pegs.helper(), Peg::new('B'));
        assert_eq!(pegs.destination(), Peg::new('C'));
    }

    #[test]
    fn new_rejects_duplicate_source() {
        assert_eq!(
            Pegs::new(Peg::X, Peg::Y, Peg::X),
            Err(SolveError::DuplicatePeg { peg: Peg::X })
        );
        assert_eq!(
            Pegs::new(Peg::X, Peg::X, Peg::Z),
            Err(SolveError::DuplicatePeg { peg: Peg::X })
        );
    }

    #[test]
    fn new_rejects_duplicate_helper_and_destination() {
        assert_eq!(
            Pegs::new(Peg::X, Peg::Y, Peg::Y),
            Err(SolveError::DuplicatePeg { peg: Peg::Y })
        );
    }

    #[test]
    fn position_finds_roles() {
        let pegs = Pegs::default();
        assert_eq!(pegs.position(Peg::X), Some(0));
        assert_eq!(pegs.position(Peg::Z), Some(2));
        assert_eq!(pegs.position(Peg::new('W')), None);
        assert!(!pegs.contains(Peg::new('W')));
    }

    #[test]
    fn deserialize_validates_labels() {
        let ok: Pegs =
            serde_json::from_str(r#"{"source":"A","helper":"B","destination":"C"}"#).unwrap();
        assert_eq!(ok.destination(), Peg::new('C'));

        let dup = serde_json::from_str::<Pegs>(r#"{"source":"A","helper":"A","destination":"C"}"#);
        assert!(dup.is_err());
    }

    #[test]
    fn peg_serializes_as_plain_char() {
        let json = serde_json::to_string(&Peg::X).unwrap();
        assert_eq!(json, "\"X\"");
    }
}
