//! Scramble configuration.

use serde::{Deserialize, Serialize};

/// Parameters for a reproducible scramble.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Number of quarter turns to apply.
    pub length: usize,

    /// Seed for the scramble RNG.
    /// Same seed produces the same scramble.
    pub seed: u64,

    /// Redraw any move that directly undoes the previous one.
    /// Off by default: a plain scramble allows cancelling pairs.
    pub forbid_immediate_undo: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: 25,
            seed: 42,
            forbid_immediate_undo: false,
        }
    }
}

impl ScrambleConfig {
    /// Set the scramble length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Redraw moves that cancel the previous move.
    #[must_use]
    pub fn forbid_immediate_undo(mut self) -> Self {
        self.forbid_immediate_undo = true;
        self
    }
}
