//! Payload-generic tile grids.
//!
//! Rotations permute tile positions without inspecting the payload, so the
//! sticker grid and the overlay grid share one pair of containers:
//! [`FaceGrid<T>`] for a single 3x3 face, [`CubeGrid<T>`] for all six.

use serde::{Deserialize, Serialize};

use super::face::Face;
use super::tile::TilePos;

/// A 3x3 grid of payload values on one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceGrid<T>([[T; 3]; 3]);

impl<T> FaceGrid<T> {
    /// Build a grid from a cell factory.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c))))
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.0[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.0[row][col] = value;
    }

    /// Iterate over `(row, col, &value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, v)))
    }
}

impl<T: Clone> FaceGrid<T> {
    /// Fill every cell with the same value.
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_, _| value.clone())
    }
}

/// All six face grids of one payload type, indexed by [`TilePos`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeGrid<T>([FaceGrid<T>; 6]);

impl<T> CubeGrid<T> {
    /// Build a cube grid from a tile factory.
    pub fn from_fn(mut f: impl FnMut(TilePos) -> T) -> Self {
        Self(std::array::from_fn(|i| {
            let face = Face::from_index(i);
            FaceGrid::from_fn(|r, c| f(TilePos::new(face, r as u8, c as u8)))
        }))
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid<T> {
        &self.0[face.index()]
    }

    pub fn face_mut(&mut self, face: Face) -> &mut FaceGrid<T> {
        &mut self.0[face.index()]
    }

    #[must_use]
    pub fn get(&self, pos: TilePos) -> &T {
        self.face(pos.face).get(pos.row as usize, pos.col as usize)
    }

    pub fn set(&mut self, pos: TilePos, value: T) {
        self.face_mut(pos.face)
            .set(pos.row as usize, pos.col as usize, value);
    }
}

impl<T: Clone> CubeGrid<T> {
    /// Fill every tile with the same value.
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}
