//! # rubiks-sim
//!
//! A 3x3x3 Rubik's Cube move engine for simulation and RL exploration.
//!
//! ## Design Principles
//!
//! 1. **One Rotation Primitive**: Only the front face is ever turned. Any
//!    other face is first brought to the front by whole-cube reorientation,
//!    turned, and the orientation restored.
//!
//! 2. **Typed Inputs**: Faces, directions, axes, and colors are closed enums.
//!    Untyped keys are validated once, at the boundary, into `CubeError`.
//!
//! 3. **Injected Randomness**: Random moves and scrambles draw from a
//!    caller-supplied `MoveSource`, seeded for reproducibility.
//!
//! 4. **Value Semantics**: Cube state is plain `Copy` data. Snapshots and
//!    restores always duplicate every facelet.
//!
//! This is not a solver. It applies moves and reports whether the cube is
//! solved.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, grids, state, moves, RNG, configuration, errors
//! - `engine`: Orientation model, rotation primitive, move dispatcher,
//!   snapshots, move sources
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Axis, Color, Direction, Face,
    FaceMap, FaceGrid, FaceletPos, CubeState,
    Move, MoveSequence,
    CubeRng, CubeRngState,
    ScrambleConfig,
    CubeError, Result,
};

pub use crate::engine::{
    RubiksCube, CubeSnapshot,
    MoveSource, ScriptedMoves,
};
