//! Core cube types: faces, colors, grids, state, moves, RNG, configuration.
//!
//! Everything here is plain data. The move math that transforms a
//! `CubeState` lives in `engine`.

pub mod error;
pub mod face;
pub mod face_map;
pub mod grid;
pub mod facelet;
pub mod state;
pub mod moves;
pub mod rng;
pub mod config;

pub use error::{CubeError, Result};
pub use face::{Axis, Color, Direction, Face};
pub use face_map::FaceMap;
pub use grid::{FaceGrid, Line, GRID_SIZE};
pub use facelet::FaceletPos;
pub use state::CubeState;
pub use moves::{Move, MoveSequence};
pub use rng::{CubeRng, CubeRngState};
pub use config::ScrambleConfig;
