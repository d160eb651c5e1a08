//! Quarter-turn moves and move sequences.
//!
//! A move is a face plus a direction. There are exactly 12 of them, listed in
//! `Move::ALL`; `Move::index()` gives a stable action id for drivers that
//! enumerate moves (e.g. an RL policy head).
//!
//! ## Notation
//!
//! | Token         | Meaning                         |
//! |---------------|---------------------------------|
//! | `R`, `R+`     | Right face clockwise            |
//! | `R'`, `R-`    | Right face counter-clockwise    |
//! | `R2`          | Two clockwise quarter turns     |
//!
//! Tokens may be separated by whitespace or written back to back:
//! `"R U R' U'"` and `"RUR'U'"` parse to the same sequence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::{CubeError, Result};
use super::face::{Direction, Face};

/// A single quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The face being turned.
    pub face: Face,
    /// Turn direction, seen facing `face`.
    pub direction: Direction,
}

impl Move {
    /// Number of distinct quarter turns.
    pub const COUNT: usize = 12;

    /// Every quarter turn: each face clockwise then counter-clockwise, faces
    /// in storage order.
    pub const ALL: [Move; 12] = [
        Move::new(Face::Front, Direction::Clockwise),
        Move::new(Face::Front, Direction::CounterClockwise),
        Move::new(Face::Back, Direction::Clockwise),
        Move::new(Face::Back, Direction::CounterClockwise),
        Move::new(Face::Up, Direction::Clockwise),
        Move::new(Face::Up, Direction::CounterClockwise),
        Move::new(Face::Down, Direction::Clockwise),
        Move::new(Face::Down, Direction::CounterClockwise),
        Move::new(Face::Right, Direction::Clockwise),
        Move::new(Face::Right, Direction::CounterClockwise),
        Move::new(Face::Left, Direction::Clockwise),
        Move::new(Face::Left, Direction::CounterClockwise),
    ];

    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Create a move from its face and direction keys.
    ///
    /// ```
    /// use rubiks_sim::core::{Direction, Face, Move};
    ///
    /// let mv = Move::from_keys('U', '-').unwrap();
    /// assert_eq!(mv, Move::new(Face::Up, Direction::CounterClockwise));
    /// assert!(Move::from_keys('U', '*').is_err());
    /// ```
    pub fn from_keys(face: char, direction: char) -> Result<Self> {
        Ok(Self::new(Face::from_key(face)?, Direction::from_key(direction)?))
    }

    /// Position of this move in `Move::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        let offset = match self.direction {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        };
        self.face.index() * 2 + offset
    }

    /// The move at `index` in `Move::ALL`.
    pub fn from_index(index: usize) -> Result<Self> {
        Move::ALL
            .get(index)
            .copied()
            .ok_or(CubeError::InvalidMoveIndex(index))
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face.key()),
            Direction::CounterClockwise => write!(f, "{}'", self.face.key()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let sequence: MoveSequence = s.parse()?;
        match sequence.as_slice() {
            [mv] => Ok(*mv),
            _ => Err(CubeError::InvalidMove(s.to_string())),
        }
    }
}

/// An ordered list of quarter turns.
///
/// Backed by a `SmallVec` so short algorithms stay on the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence {
    moves: SmallVec<[Move; 16]>,
}

impl MoveSequence {
    /// An empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The moves in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Number of quarter turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over the moves.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    ///
    /// ```
    /// use rubiks_sim::core::MoveSequence;
    ///
    /// let alg: MoveSequence = "R U R' U'".parse().unwrap();
    /// assert_eq!(alg.inverse().to_string(), "U R U' R'");
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl From<&[Move]> for MoveSequence {
    fn from(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut sequence = MoveSequence::new();
        let mut chars = s.chars().filter(|c| !c.is_whitespace()).peekable();

        while let Some(key) = chars.next() {
            let face = Face::from_key(key).map_err(|_| CubeError::InvalidMove(s.to_string()))?;

            match chars.peek() {
                Some('\'') | Some('-') => {
                    chars.next();
                    sequence.push(Move::new(face, Direction::CounterClockwise));
                }
                Some('+') => {
                    chars.next();
                    sequence.push(Move::new(face, Direction::Clockwise));
                }
                Some('2') => {
                    chars.next();
                    sequence.push(Move::new(face, Direction::Clockwise));
                    sequence.push(Move::new(face, Direction::Clockwise));
                }
                _ => sequence.push(Move::new(face, Direction::Clockwise)),
            }
        }

        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_moves_distinct_and_indexed() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(Move::from_index(i).unwrap(), *mv);
        }
        assert_eq!(Move::from_index(12), Err(CubeError::InvalidMoveIndex(12)));
    }

    #[test]
    fn test_inverse() {
        let mv = Move::new(Face::Right, Direction::Clockwise);
        assert_eq!(mv.inverse(), Move::new(Face::Right, Direction::CounterClockwise));
        assert_eq!(mv.inverse().inverse(), mv);
    }

    #[test]
    fn test_from_keys_rejects_invalid() {
        assert_eq!(Move::from_keys('Q', '+'), Err(CubeError::InvalidFace('Q')));
        assert_eq!(Move::from_keys('F', 'x'), Err(CubeError::InvalidDirection('x')));
    }

    #[test]
    fn test_move_display_and_parse() {
        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        }
        assert_eq!("F+".parse::<Move>().unwrap(), Move::new(Face::Front, Direction::Clockwise));
        assert_eq!(
            "F-".parse::<Move>().unwrap(),
            Move::new(Face::Front, Direction::CounterClockwise)
        );
        assert!("F2".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_sequence_parse_spaced_and_compact() {
        let spaced: MoveSequence = "R U R' U'".parse().unwrap();
        let compact: MoveSequence = "RUR'U'".parse().unwrap();

        assert_eq!(spaced, compact);
        assert_eq!(spaced.len(), 4);
        assert_eq!(spaced.to_string(), "R U R' U'");
    }

    #[test]
    fn test_sequence_parse_double_turn() {
        let seq: MoveSequence = "U2 F".parse().unwrap();
        assert_eq!(seq.to_string(), "U U F");
    }

    #[test]
    fn test_sequence_parse_rejects_unknown_face() {
        assert_eq!(
            "R X".parse::<MoveSequence>(),
            Err(CubeError::InvalidMove("R X".to_string()))
        );
        assert_eq!(
            "'R".parse::<MoveSequence>(),
            Err(CubeError::InvalidMove("'R".to_string()))
        );
    }

    #[test]
    fn test_sequence_inverse() {
        let seq: MoveSequence = "F R' D".parse().unwrap();
        assert_eq!(seq.inverse().to_string(), "D' R F'");
        assert_eq!(seq.inverse().inverse(), seq);
    }

    #[test]
    fn test_empty_sequence() {
        let seq: MoveSequence = "   ".parse().unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_sequence_serialization() {
        let seq: MoveSequence = "L B' U".parse().unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        let deserialized: MoveSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, deserialized);
    }
}
