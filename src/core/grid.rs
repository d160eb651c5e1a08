//! A single face's 3x3 grid of facelets.
//!
//! ## Indexing
//!
//! Row-major `(row, col)`: rows `0..3` top to bottom, columns `0..3` left to
//! right, as seen looking at the face from outside the cube with that face's
//! fixed up reference at the top:
//!
//! - Front, Back, Right, Left: Up is at the top edge.
//! - Up: Back is at the top edge, Front at the bottom edge.
//! - Down: Front is at the top edge, Back at the bottom edge.
//!
//! The rotation and belt tables in `engine` rely on this convention.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::face::Color;

/// Side length of a face.
pub const GRID_SIZE: usize = 3;

/// One row or column of a face, read left-to-right or top-to-bottom.
pub type Line = [Color; GRID_SIZE];

/// Reverse the order of a line.
#[must_use]
pub fn reversed(line: Line) -> Line {
    [line[2], line[1], line[0]]
}

/// 3x3 facelet grid.
///
/// `FaceGrid` is `Copy`: assigning or returning a grid always duplicates its
/// nine cells, so two grids never share storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceGrid {
    cells: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl FaceGrid {
    /// A grid with every facelet set to `color`.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            cells: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// A grid from explicit rows.
    #[must_use]
    pub const fn from_rows(rows: [[Color; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells: rows }
    }

    /// The rows of this grid.
    #[must_use]
    pub fn rows(&self) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Facelet at `(row, col)`.
    ///
    /// Panics if either index is 3 or more.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    /// Overwrite the facelet at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, color: Color) {
        self.cells[row][col] = color;
    }

    /// Row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    /// Overwrite row `row`.
    pub fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    /// Column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> Line {
        [self.cells[0][col], self.cells[1][col], self.cells[2][col]]
    }

    /// Overwrite column `col`.
    pub fn set_column(&mut self, col: usize, line: Line) {
        for (row, color) in line.into_iter().enumerate() {
            self.cells[row][col] = color;
        }
    }

    /// This grid turned a quarter clockwise.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let mut out = *self;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[row][col] = self.cells[GRID_SIZE - 1 - col][row];
            }
        }
        out
    }

    /// This grid turned a quarter counter-clockwise.
    #[must_use]
    pub fn rotated_ccw(&self) -> Self {
        let mut out = *self;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[row][col] = self.cells[col][GRID_SIZE - 1 - row];
            }
        }
        out
    }

    /// This grid turned by 180 degrees.
    #[must_use]
    pub fn rotated_half(&self) -> Self {
        let mut out = *self;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[row][col] = self.cells[GRID_SIZE - 1 - row][GRID_SIZE - 1 - col];
            }
        }
        out
    }

    /// True if all nine facelets equal the one at `(0, 0)`.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let first = self.cells[0][0];
        self.iter().all(|c| c == first)
    }

    /// Iterate over facelets in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for FaceGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn sample() -> FaceGrid {
        FaceGrid::from_rows([
            [White, Yellow, Blue],
            [Green, Red, Orange],
            [White, White, Yellow],
        ])
    }

    #[test]
    fn test_rows_and_columns() {
        let grid = sample();

        assert_eq!(grid.row(0), [White, Yellow, Blue]);
        assert_eq!(grid.column(0), [White, Green, White]);
        assert_eq!(grid.column(2), [Blue, Orange, Yellow]);
        assert_eq!(grid[(1, 2)], Orange);
    }

    #[test]
    fn test_set_row_and_column() {
        let mut grid = FaceGrid::filled(Red);

        grid.set_row(2, [White, Yellow, Blue]);
        grid.set_column(0, [Green, Green, Orange]);

        assert_eq!(grid.row(0), [Green, Red, Red]);
        assert_eq!(grid.row(2), [Orange, Yellow, Blue]);
    }

    #[test]
    fn test_rotated_cw() {
        let grid = sample();
        let cw = grid.rotated_cw();

        // Left column, read bottom to top, becomes the top row.
        assert_eq!(cw.row(0), [White, Green, White]);
        assert_eq!(cw.row(1), [White, Red, Yellow]);
        assert_eq!(cw.row(2), [Yellow, Orange, Blue]);
    }

    #[test]
    fn test_rotated_ccw() {
        let grid = sample();
        let ccw = grid.rotated_ccw();

        // Right column, read top to bottom, becomes the top row.
        assert_eq!(ccw.row(0), [Blue, Orange, Yellow]);
        assert_eq!(ccw.row(1), [Yellow, Red, White]);
        assert_eq!(ccw.row(2), [White, Green, White]);
    }

    #[test]
    fn test_rotation_identities() {
        let grid = sample();

        assert_eq!(grid.rotated_cw().rotated_ccw(), grid);
        assert_eq!(grid.rotated_cw().rotated_cw(), grid.rotated_half());
        assert_eq!(grid.rotated_half().rotated_half(), grid);
        assert_eq!(
            grid.rotated_cw().rotated_cw().rotated_cw().rotated_cw(),
            grid
        );
    }

    #[test]
    fn test_is_uniform() {
        assert!(FaceGrid::filled(Blue).is_uniform());
        assert!(!sample().is_uniform());

        let mut grid = FaceGrid::filled(Blue);
        grid.set(2, 2, Red);
        assert!(!grid.is_uniform());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed([White, Red, Blue]), [Blue, Red, White]);
    }
}
