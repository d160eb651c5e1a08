//! Move sources for random moves and scrambles.
//!
//! `RubiksCube::random_move` and `RubiksCube::scramble` take their moves from
//! a `MoveSource` instead of a hidden global generator:
//!
//! - `CubeRng`: uniform choice of face, then uniform choice of direction.
//! - `ScriptedMoves`: replays a fixed list, for deterministic tests.

use crate::core::{CubeError, CubeRng, Direction, Face, Move, MoveSequence, Result};

/// Supplies the next move to apply.
pub trait MoveSource {
    /// Produce the next move.
    fn next_move(&mut self) -> Move;
}

impl MoveSource for CubeRng {
    fn next_move(&mut self) -> Move {
        let face = Face::ALL[self.gen_range_usize(0..Face::COUNT)];
        let direction = Direction::ALL[self.gen_range_usize(0..Direction::ALL.len())];
        Move::new(face, direction)
    }
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Replays a fixed move list, wrapping around when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    moves: MoveSequence,
    cursor: usize,
}

impl ScriptedMoves {
    /// Create a source from a non-empty sequence.
    pub fn new(moves: MoveSequence) -> Result<Self> {
        if moves.is_empty() {
            return Err(CubeError::EmptyScript);
        }
        Ok(Self { moves, cursor: 0 })
    }

    /// Create a source from notation, e.g. `"R U R' U'"`.
    pub fn parse(notation: &str) -> Result<Self> {
        Self::new(notation.parse()?)
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let moves = self.moves.as_slice();
        let mv = moves[self.cursor % moves.len()];
        self.cursor = (self.cursor + 1) % moves.len();
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_source_covers_all_moves() {
        let mut rng = CubeRng::new(7);
        let mut seen = [false; Move::COUNT];

        for _ in 0..500 {
            seen[rng.next_move().index()] = true;
        }

        assert!(seen.iter().all(|&s| s), "every move should appear: {seen:?}");
    }

    #[test]
    fn test_rng_source_is_deterministic() {
        let mut a = CubeRng::new(99);
        let mut b = CubeRng::new(99);

        for _ in 0..50 {
            assert_eq!(a.next_move(), b.next_move());
        }
    }

    #[test]
    fn test_scripted_moves_wrap() {
        let mut source = ScriptedMoves::parse("F U'").unwrap();

        let drawn: MoveSequence = (0..5).map(|_| source.next_move()).collect();

        assert_eq!(drawn.to_string(), "F U' F U' F");
    }

    #[test]
    fn test_scripted_moves_reject_empty() {
        assert!(matches!(
            ScriptedMoves::new(MoveSequence::new()),
            Err(CubeError::EmptyScript)
        ));
        assert!(matches!(ScriptedMoves::parse("Q"), Err(CubeError::InvalidMove(_))));
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw(mut source: impl MoveSource) -> Move {
            source.next_move()
        }

        let mut source = ScriptedMoves::parse("B R").unwrap();
        assert_eq!(draw(&mut source).to_string(), "B");
        assert_eq!(draw(&mut source).to_string(), "R");
    }
}
