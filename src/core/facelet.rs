//! Addressing individual facelets.
//!
//! A facelet is named by its face key followed by row and column digits, so
//! `F01` is the top-middle facelet of the Front face and `D22` the
//! bottom-right facelet of Down.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{CubeError, Result};
use super::face::Face;
use super::grid::GRID_SIZE;

/// Position of one of the 54 facelets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceletPos {
    /// Face holding the facelet.
    pub face: Face,
    /// Row, `0..3` top to bottom.
    pub row: u8,
    /// Column, `0..3` left to right.
    pub col: u8,
}

impl FaceletPos {
    /// Total number of facelets on the cube.
    pub const COUNT: usize = Face::COUNT * GRID_SIZE * GRID_SIZE;

    /// Create a position, or `None` if `row` or `col` is out of range.
    #[must_use]
    pub fn new(face: Face, row: u8, col: u8) -> Option<Self> {
        let size = GRID_SIZE as u8;
        (row < size && col < size).then_some(Self { face, row, col })
    }

    /// All 54 positions, face by face in storage order, row-major within
    /// each face.
    pub fn all() -> impl Iterator<Item = FaceletPos> {
        let size = GRID_SIZE as u8;
        Face::ALL.into_iter().flat_map(move |face| {
            (0..size).flat_map(move |row| (0..size).map(move |col| FaceletPos { face, row, col }))
        })
    }

    /// Flat index in `0..54`, consistent with `all()`.
    #[must_use]
    pub fn index(self) -> usize {
        face_offset(self.face) + self.row as usize * GRID_SIZE + self.col as usize
    }
}

fn face_offset(face: Face) -> usize {
    face.index() * GRID_SIZE * GRID_SIZE
}

impl std::fmt::Display for FaceletPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.face.key(), self.row, self.col)
    }
}

impl FromStr for FaceletPos {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CubeError::InvalidFacelet(s.to_string());

        let mut chars = s.chars();
        let (Some(face), Some(row), Some(col), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let face = Face::from_key(face).map_err(|_| invalid())?;
        let row = row.to_digit(10).ok_or_else(invalid)? as u8;
        let col = col.to_digit(10).ok_or_else(invalid)? as u8;

        FaceletPos::new(face, row, col).ok_or_else(invalid)
    }
}
