//! Detached copies of cube state for backtracking.
//!
//! A `CubeSnapshot` owns its own 54 facelets. Taking one copies out of the
//! live cube, restoring one copies back in; neither side can observe later
//! changes to the other.
//!
//! Snapshots also encode to a compact binary form with `bincode`, for
//! drivers that persist exploration branches.

use serde::{Deserialize, Serialize};

use crate::core::{CubeError, CubeState, Face, FaceGrid, Result};

/// Frozen copy of a cube's facelets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeSnapshot {
    state: CubeState,
}

impl CubeSnapshot {
    /// Capture a copy of `state`.
    #[must_use]
    pub fn capture(state: &CubeState) -> Self {
        Self { state: *state }
    }

    /// The captured state.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// The captured grid of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        self.state.face(face)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| CubeError::Encode(e.to_string()))
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| CubeError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn test_capture_is_a_copy() {
        let mut state = CubeState::solved();
        let snapshot = CubeSnapshot::capture(&state);

        state[Face::Front].set(1, 1, Color::Orange);

        assert_eq!(snapshot.face(Face::Front).get(1, 1), Color::White);
        assert_eq!(*snapshot.state(), CubeState::solved());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut state = CubeState::solved();
        state[Face::Left].set(0, 2, Color::Blue);
        let snapshot = CubeSnapshot::capture(&state);

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = CubeSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = CubeSnapshot::from_bytes(&[0xFF, 0x01]);
        assert!(matches!(result, Err(CubeError::Decode(_))));
    }

    #[test]
    fn test_from_bytes_rejects_bad_color() {
        let snapshot = CubeSnapshot::capture(&CubeState::solved());
        let mut bytes = snapshot.to_bytes().unwrap();
        bytes[0] = 200;

        assert!(matches!(CubeSnapshot::from_bytes(&bytes), Err(CubeError::Decode(_))));
    }
}
