//! The six named faces of the cube.
//!
//! Faces follow the fixed cross layout used when the cube is unfolded:
//! Up above Front, Down below Front, Left/Right beside Front, Back to the
//! right of Right. The canonical order U, L, F, R, B, D is used for dense
//! tile indexing and snapshot encoding. Adjacency between faces is encoded
//! entirely inside the rotation permutations, never derived from layout.

use serde::{Deserialize, Serialize};

/// One of the six 3x3 face grids forming the cube's exterior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    /// All faces in canonical order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// Dense index in canonical order (0..6).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Left => 1,
            Face::Front => 2,
            Face::Right => 3,
            Face::Back => 4,
            Face::Down => 5,
        }
    }

    /// Inverse of [`Face::index`].
    ///
    /// Panics if `index >= 6`.
    #[must_use]
    pub const fn from_index(index: usize) -> Face {
        Self::ALL[index]
    }

    /// Single-letter notation used in twist names and diagnostics.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Down => 'D',
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
