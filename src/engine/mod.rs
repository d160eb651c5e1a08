//! The move-application engine.
//!
//! Layered as:
//!
//! - `orientation`: whole-cube quarter turns and the adjacency tables that
//!   bring any face to the front
//! - `rotation`: the single front-face rotation primitive
//! - `cube`: `RubiksCube`, which combines the two into moves on any face,
//!   plus scramble, solved check, snapshot/restore, and reset
//!
//! Randomness comes from a `MoveSource` passed in by the caller.

pub mod orientation;
pub mod rotation;
pub mod source;
pub mod snapshot;
pub mod cube;

pub use orientation::{
    apply_orientation, apply_turns, forward_adjacency, inverse_adjacency, reorient, TurnSequence,
};
pub use rotation::rotate_front;
pub use source::{MoveSource, ScriptedMoves};
pub use snapshot::CubeSnapshot;
pub use cube::RubiksCube;
