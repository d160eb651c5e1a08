//! Cube bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CubeError, CubeRng, Face, Move};
use crate::engine::{CubeSnapshot, RubiksCube};

fn to_py_err(err: CubeError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for RubiksCube.
///
/// Owns its own seeded RNG, so `random_move` and `scramble` are
/// reproducible per seed.
#[pyclass(name = "Cube")]
pub struct PyCube {
    cube: RubiksCube,
    rng: CubeRng,
}

#[pymethods]
impl PyCube {
    /// Create a solved cube.
    ///
    /// # Arguments
    /// - seed: RNG seed for random moves and scrambles
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            cube: RubiksCube::new(),
            rng: CubeRng::new(seed),
        }
    }

    /// Apply a move by keys, e.g. `cube.move("R", "-")`.
    #[pyo3(name = "move")]
    fn key_move(&mut self, face: char, direction: char) -> PyResult<()> {
        self.cube.key_move(face, direction).map_err(to_py_err)
    }

    /// Apply notation such as `"R U R' U'"`. Returns the applied moves.
    fn apply(&mut self, notation: &str) -> PyResult<String> {
        self.cube
            .apply_notation(notation)
            .map(|moves| moves.to_string())
            .map_err(to_py_err)
    }

    /// Apply the move with the given index (0..12).
    fn step(&mut self, index: usize) -> PyResult<()> {
        let mv = Move::from_index(index).map_err(to_py_err)?;
        self.cube.apply_move(mv);
        Ok(())
    }

    /// Apply one random move. Returns it in notation.
    fn random_move(&mut self) -> String {
        self.cube.random_move(&mut self.rng).to_string()
    }

    /// Apply `n` random moves. Returns them in notation.
    fn scramble(&mut self, n: usize) -> String {
        self.cube.scramble(n, &mut self.rng).to_string()
    }

    /// Check if every face shows a single color.
    fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Return to the solved state.
    fn reset(&mut self) {
        self.cube.reset();
    }

    /// Capture the current state.
    fn snapshot(&self) -> PyCubeSnapshot {
        PyCubeSnapshot(self.cube.snapshot())
    }

    /// Restore a captured state.
    fn restore(&mut self, snapshot: &PyCubeSnapshot) {
        self.cube.restore(&snapshot.0);
    }

    /// Color codes of one face as a 3x3 nested list.
    fn face(&self, face: char) -> PyResult<Vec<Vec<u8>>> {
        let face = Face::from_key(face).map_err(to_py_err)?;
        Ok(self
            .cube
            .face(face)
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect())
    }

    /// All 54 color codes, faces in F B U D R L order, row-major.
    fn observation(&self) -> Vec<u8> {
        self.cube.state().facelets().map(|c| c.code()).collect()
    }

    fn __repr__(&self) -> String {
        format!("Cube(solved={})", self.cube.is_solved())
    }
}

/// Python wrapper for CubeSnapshot.
#[pyclass(name = "CubeSnapshot")]
#[derive(Clone, Debug)]
pub struct PyCubeSnapshot(pub CubeSnapshot);

#[pymethods]
impl PyCubeSnapshot {
    /// Encode to bytes.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0.to_bytes().map_err(to_py_err)
    }

    /// Decode bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(data: Vec<u8>) -> PyResult<Self> {
        CubeSnapshot::from_bytes(&data).map(Self).map_err(to_py_err)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __repr__(&self) -> String {
        format!("CubeSnapshot(solved={})", self.0.state().is_solved())
    }
}
