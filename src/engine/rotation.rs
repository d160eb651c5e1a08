//! The front-face rotation primitive.
//!
//! Turns whatever face currently holds the Front role, and cycles the belt:
//! Up's bottom row, Right's left column, Down's top row, and Left's right
//! column. Every other face is moved to the front first (see
//! `orientation`), so this is the only place facelets change neighbors.
//!
//! A line is reversed whenever it moves between a row and a column whose
//! reading directions run opposite around the front face.

use crate::core::grid::reversed;
use crate::core::{CubeState, Direction, Face};

/// Quarter-turn the Front face in `direction` and permute the belt.
///
/// All four belt lines are read before any is written.
pub fn rotate_front(state: &mut CubeState, direction: Direction) {
    let up = state[Face::Up].row(2);
    let right = state[Face::Right].column(0);
    let down = state[Face::Down].row(0);
    let left = state[Face::Left].column(2);

    match direction {
        Direction::Clockwise => {
            state[Face::Front] = state[Face::Front].rotated_cw();
            state[Face::Up].set_row(2, reversed(left));
            state[Face::Left].set_column(2, down);
            state[Face::Down].set_row(0, reversed(right));
            state[Face::Right].set_column(0, up);
        }
        Direction::CounterClockwise => {
            state[Face::Front] = state[Face::Front].rotated_ccw();
            state[Face::Up].set_row(2, right);
            state[Face::Right].set_column(0, reversed(down));
            state[Face::Down].set_row(0, left);
            state[Face::Left].set_column(2, reversed(up));
        }
    }
}
