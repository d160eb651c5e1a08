//! Per-face data storage.
//!
//! `FaceMap<T>` holds exactly one `T` per face in a fixed array, indexed by
//! `Face`. It is the cube's equivalent of a six-entry lookup table: O(1)
//! access, no hashing, and `Clone` always duplicates every entry.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::face::Face;

/// One value per face with O(1) access.
///
/// ## Example
///
/// ```
/// use rubiks_sim::core::{Face, FaceMap};
///
/// let mut turns: FaceMap<u32> = FaceMap::with_value(0);
/// turns[Face::Right] += 1;
///
/// assert_eq!(turns[Face::Right], 1);
/// assert_eq!(turns[Face::Left], 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a map with values from a factory function.
    ///
    /// The factory receives each `Face` in storage order.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's entry.
    #[must_use]
    pub fn get(&self, face: Face) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's entry.
    pub fn get_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (Face, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Face, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Face, &mut T)> {
        Face::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the entries in storage order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for FaceMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        self.get(face)
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        self.get_mut(face)
    }
}
