//! Python bindings for the rubiks-sim cube engine.
//!
//! Built with the `python` feature. Intended for RL drivers that step a cube
//! by move index and read its 54 facelet codes as an observation.
//!
//! # Quick Start
//!
//! ```python
//! import rubiks_sim as rs
//!
//! cube = rs.Cube(seed=42)
//! cube.scramble(20)
//!
//! obs = cube.observation()        # 54 color codes in 1..=6
//! cube.step(3)                    # apply Move.ALL[3] (B-)
//! done = cube.is_solved()
//!
//! snap = cube.snapshot()
//! cube.apply("R U R' U'")
//! cube.restore(snap)
//! ```

use pyo3::prelude::*;

mod py_cube;

pub use py_cube::*;

/// rubiks_sim: a 3x3x3 cube move engine.
#[pymodule]
fn rubiks_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;
    m.add_class::<PyCubeSnapshot>()?;
    m.add("MOVE_COUNT", crate::core::Move::COUNT)?;

    Ok(())
}
