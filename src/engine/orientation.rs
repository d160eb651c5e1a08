//! Whole-cube reorientation.
//!
//! Reorienting relabels which physical face plays each role (Front, Back,
//! Up, Down, Right, Left). Grids move as whole units; faces that stay on the
//! turn axis, or that are seen from the far side of it, are rotated in place
//! so their up reference stays consistent with `core::grid`.
//!
//! Only two turns exist, `h` and `v`. Any other orientation is a repeat of
//! one of them, which is how `apply_orientation` handles negative counts.

use crate::core::{Axis, CubeState, Face};

/// A run of whole-cube quarter turns: `(axis, count)` pairs applied in order.
pub type TurnSequence = &'static [(Axis, i32)];

/// Turns that bring `face` to the Front position.
#[must_use]
pub const fn forward_adjacency(face: Face) -> TurnSequence {
    match face {
        Face::Front => &[],
        Face::Back => &[(Axis::Horizontal, 2)],
        Face::Up => &[(Axis::Vertical, 1)],
        Face::Down => &[(Axis::Vertical, -1)],
        Face::Right => &[(Axis::Horizontal, 1)],
        Face::Left => &[(Axis::Horizontal, -1)],
    }
}

/// Turns that undo `forward_adjacency(face)`.
#[must_use]
pub const fn inverse_adjacency(face: Face) -> TurnSequence {
    match face {
        Face::Front => &[],
        Face::Back => &[(Axis::Horizontal, 2)],
        Face::Up => &[(Axis::Vertical, -1)],
        Face::Down => &[(Axis::Vertical, 1)],
        Face::Right => &[(Axis::Horizontal, -1)],
        Face::Left => &[(Axis::Horizontal, 1)],
    }
}

/// Turn the whole cube a quarter about `axis`.
///
/// - `Horizontal`: Front takes Right, Right takes Back, Back takes Left,
///   Left takes Front. Up turns clockwise in place, Down counter-clockwise.
/// - `Vertical`: Front takes Up, Up takes Back, Back takes Down, Down takes
///   Front. Back and Down arrive rotated 180 degrees. Left turns clockwise
///   in place, Right counter-clockwise.
pub fn reorient(state: &mut CubeState, axis: Axis) {
    match axis {
        Axis::Horizontal => {
            shift_faces(state, [Face::Front, Face::Right, Face::Back, Face::Left]);
            state[Face::Up] = state[Face::Up].rotated_cw();
            state[Face::Down] = state[Face::Down].rotated_ccw();
        }
        Axis::Vertical => {
            shift_faces(state, [Face::Front, Face::Up, Face::Back, Face::Down]);
            // Up and Back now hold the old Back and Down, seen from behind.
            state[Face::Up] = state[Face::Up].rotated_half();
            state[Face::Back] = state[Face::Back].rotated_half();
            state[Face::Left] = state[Face::Left].rotated_cw();
            state[Face::Right] = state[Face::Right].rotated_ccw();
        }
    }
}

/// Apply `reorient(axis)` `count mod 4` times.
///
/// Negative counts normalize into `0..4` repeats of the same turn, so
/// `-1` means three turns.
pub fn apply_orientation(state: &mut CubeState, axis: Axis, count: i32) {
    for _ in 0..count.rem_euclid(4) {
        reorient(state, axis);
    }
}

/// Apply every `(axis, count)` entry of a turn sequence in order.
pub fn apply_turns(state: &mut CubeState, turns: TurnSequence) {
    for &(axis, count) in turns {
        apply_orientation(state, axis, count);
    }
}

/// Each face in `ring` takes the grid of the next one; the last takes the
/// first.
fn shift_faces(state: &mut CubeState, ring: [Face; 4]) {
    let first = state[ring[0]];
    for pair in ring.windows(2) {
        state[pair[0]] = state[pair[1]];
    }
    state[ring[3]] = first;
}
