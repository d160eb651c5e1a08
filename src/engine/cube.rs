//! The move dispatcher.
//!
//! `RubiksCube` owns a `CubeState` and implements a move on any face with a
//! single rotation primitive:
//!
//! 1. reorient so the target face is at the front (`forward_adjacency`),
//! 2. `rotate_front` in the requested direction,
//! 3. reorient back (`inverse_adjacency`).
//!
//! Scrambles, solved checks, and snapshot/restore are layered on top.

use log::{debug, trace};

use super::orientation::{apply_orientation, apply_turns, forward_adjacency, inverse_adjacency, reorient};
use super::rotation::rotate_front;
use super::snapshot::CubeSnapshot;
use super::source::MoveSource;
use crate::core::{
    Axis, Color, CubeRng, CubeState, Direction, Face, FaceGrid, FaceletPos, Move, MoveSequence, Result,
    ScrambleConfig,
};

/// A 3x3x3 cube and the operations that transform it.
///
/// ## Example
///
/// ```
/// use rubiks_sim::{CubeRng, Direction, Face, RubiksCube};
///
/// let mut cube = RubiksCube::new();
/// assert!(cube.is_solved());
///
/// cube.turn(Face::Right, Direction::Clockwise);
/// assert!(!cube.is_solved());
///
/// cube.turn(Face::Right, Direction::CounterClockwise);
/// assert!(cube.is_solved());
///
/// let mut rng = CubeRng::new(42);
/// let applied = cube.scramble(20, &mut rng);
/// assert_eq!(applied.len(), 20);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RubiksCube {
    state: CubeState,
}

impl RubiksCube {
    /// Create a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CubeState::solved(),
        }
    }

    /// Create a cube in an arbitrary state.
    #[must_use]
    pub fn from_state(state: CubeState) -> Self {
        Self { state }
    }

    // === Inspection ===

    /// The current facelets.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// The current grid of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        self.state.face(face)
    }

    /// Color at a facelet position.
    #[must_use]
    pub fn facelet(&self, pos: FaceletPos) -> Color {
        self.state.facelet(pos)
    }

    /// Check if every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    // === Moves ===

    /// Quarter-turn `face` in `direction`.
    pub fn turn(&mut self, face: Face, direction: Direction) {
        trace!("turn {}{}", face.key(), direction.key());
        apply_turns(&mut self.state, forward_adjacency(face));
        rotate_front(&mut self.state, direction);
        apply_turns(&mut self.state, inverse_adjacency(face));
    }

    /// Apply a single move.
    pub fn apply_move(&mut self, mv: Move) {
        self.turn(mv.face, mv.direction);
    }

    /// Apply a move given by its face and direction keys.
    ///
    /// Keys outside `F B U D R L` / `+ -` are rejected and the cube is left
    /// untouched.
    pub fn key_move(&mut self, face: char, direction: char) -> Result<()> {
        let mv = Move::from_keys(face, direction)?;
        self.apply_move(mv);
        Ok(())
    }

    /// Apply each move of a sequence in order.
    pub fn apply_moves(&mut self, moves: &MoveSequence) {
        for mv in moves.iter() {
            self.apply_move(mv);
        }
    }

    /// Parse notation and apply it.
    ///
    /// The whole string is parsed before any move is applied, so a parse
    /// error leaves the cube untouched.
    pub fn apply_notation(&mut self, notation: &str) -> Result<MoveSequence> {
        let moves: MoveSequence = notation.parse()?;
        self.apply_moves(&moves);
        Ok(moves)
    }

    // === Orientation ===

    /// Turn the whole cube a quarter about `axis`.
    pub fn reorient(&mut self, axis: Axis) {
        reorient(&mut self.state, axis);
    }

    /// Turn the whole cube `count mod 4` quarters about `axis`.
    pub fn apply_orientation(&mut self, axis: Axis, count: i32) {
        apply_orientation(&mut self.state, axis, count);
    }

    // === Randomness ===

    /// Apply one move drawn from `source`, returning it.
    pub fn random_move(&mut self, source: &mut impl MoveSource) -> Move {
        let mv = source.next_move();
        self.apply_move(mv);
        mv
    }

    /// Apply `n` moves drawn from `source`.
    ///
    /// Moves are independent: repeats and immediately cancelling pairs are
    /// allowed. Returns the applied moves, whose `inverse()` restores the
    /// starting state.
    pub fn scramble(&mut self, n: usize, source: &mut impl MoveSource) -> MoveSequence {
        let applied: MoveSequence = (0..n).map(|_| self.random_move(source)).collect();
        debug!("scrambled with {n} moves: {applied}");
        applied
    }

    /// Run a reproducible scramble described by `config`.
    pub fn scramble_with(&mut self, config: &ScrambleConfig) -> MoveSequence {
        let mut rng = CubeRng::new(config.seed);

        if !config.forbid_immediate_undo {
            return self.scramble(config.length, &mut rng);
        }

        let mut applied = MoveSequence::new();
        let mut previous: Option<Move> = None;
        while applied.len() < config.length {
            let mv = rng.next_move();
            if previous.is_some_and(|p| p.inverse() == mv) {
                continue;
            }
            self.apply_move(mv);
            applied.push(mv);
            previous = Some(mv);
        }

        debug!("scrambled with seed {}: {applied}", config.seed);
        applied
    }

    // === State management ===

    /// Copy the current state out.
    #[must_use]
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot::capture(&self.state)
    }

    /// Replace the current state with a copy of `snapshot`.
    pub fn restore(&mut self, snapshot: &CubeSnapshot) {
        debug!("restoring snapshot");
        self.state = *snapshot.state();
    }

    /// Discard the current state and return to solved.
    ///
    /// Callers wanting a scrambled start call `scramble` afterwards.
    pub fn reset(&mut self) {
        debug!("reset to solved");
        self.state = CubeState::solved();
    }
}
