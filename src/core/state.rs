//! Cube state: the six face grids.
//!
//! ## CubeState
//!
//! Plain data with value semantics. Every face grid is stored inline, so
//! cloning a state copies all 54 facelets and never shares storage with the
//! original.
//!
//! ## Invariants
//!
//! - Exactly 9 facelets per face, 54 in total (enforced by the types).
//! - Every move is a permutation of facelets, so `color_counts()` is
//!   conserved by any sequence of moves.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::face::{Color, Face};
use super::face_map::FaceMap;
use super::facelet::FaceletPos;
use super::grid::FaceGrid;

/// Facelet colors of all six faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    faces: FaceMap<FaceGrid>,
}

impl CubeState {
    /// The solved state: every face filled with its home color.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            faces: FaceMap::new(|face| FaceGrid::filled(face.home_color())),
        }
    }

    /// Build a state from explicit grids.
    #[must_use]
    pub fn from_faces(faces: FaceMap<FaceGrid>) -> Self {
        Self { faces }
    }

    /// All face grids.
    #[must_use]
    pub fn faces(&self) -> &FaceMap<FaceGrid> {
        &self.faces
    }

    /// The grid of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face]
    }

    /// Mutable grid of one face.
    pub fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face]
    }

    /// Color at a facelet position.
    #[must_use]
    pub fn facelet(&self, pos: FaceletPos) -> Color {
        self.faces[pos.face].get(pos.row as usize, pos.col as usize)
    }

    /// Overwrite a single facelet.
    ///
    /// This can produce states unreachable by moves; the engine accepts them.
    pub fn set_facelet(&mut self, pos: FaceletPos, color: Color) {
        self.faces[pos.face].set(pos.row as usize, pos.col as usize, color);
    }

    /// Check if every face is a single color.
    ///
    /// The colors need not be the home colors: a state whose faces are each
    /// uniform counts as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(FaceGrid::is_uniform)
    }

    /// Number of facelets of each color present.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for grid in self.faces.values() {
            for color in grid.iter() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// All 54 facelet colors in `FaceletPos::all()` order.
    pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
        self.faces.values().flat_map(|grid| grid.iter())
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &Self::Output {
        &self.faces[face]
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.faces[face]
    }
}
