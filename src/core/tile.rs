//! Tile positions and the values that live on tiles.
//!
//! Each of the 54 tiles holds two independent values:
//! - a physical [`Sticker`], permuted by rotations so the cube simulation
//!   stays faithful even though stickers carry no gameplay meaning in the
//!   base game;
//! - an overlay token: a player [`Mark`], or (extended ruleset) a creature
//!   or an egg. Creatures and eggs are stored positionally on
//!   [`CubeState`](super::state::CubeState), not in the overlay grid, so at
//!   most one of {mark, creature, egg} ever claims a tile.

use serde::{Deserialize, Serialize};

use super::face::Face;

/// Position of a tile: face plus row/column in 0..3.
///
/// Row 0 is the top row of a face in the unfolded layout; rotations are
/// defined purely in terms of these grid indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePos {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl TilePos {
    /// Create a tile position. Row and column must be in 0..3.
    #[must_use]
    pub fn new(face: Face, row: u8, col: u8) -> Self {
        debug_assert!(row < 3 && col < 3, "row/col out of range");
        Self { face, row, col }
    }

    /// Dense index in 0..54: `face * 9 + row * 3 + col`.
    #[must_use]
    pub fn index(self) -> usize {
        self.face.index() * 9 + self.row as usize * 3 + self.col as usize
    }

    /// Inverse of [`TilePos::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 54, "tile index out of range");
        Self {
            face: Face::from_index(index / 9),
            row: ((index % 9) / 3) as u8,
            col: (index % 3) as u8,
        }
    }

    /// Iterate over all 54 tile positions in index order.
    pub fn all() -> impl Iterator<Item = TilePos> {
        (0..54).map(TilePos::from_index)
    }

    /// The centre cell of the given face.
    #[must_use]
    pub fn centre(face: Face) -> Self {
        Self::new(face, 1, 1)
    }

    /// The four corner cells of the given face.
    #[must_use]
    pub fn corners(face: Face) -> [TilePos; 4] {
        [
            Self::new(face, 0, 0),
            Self::new(face, 0, 2),
            Self::new(face, 2, 0),
            Self::new(face, 2, 2),
        ]
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.face, self.row, self.col)
    }
}

/// A player's mark. Three marks exist to support three-sided matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Nought,
    Cross,
    Triangle,
}

impl Mark {
    /// Marks in turn order for a match with `sides` players (2 or 3).
    #[must_use]
    pub fn roster(sides: u8) -> &'static [Mark] {
        match sides {
            2 => &[Mark::Nought, Mark::Cross],
            _ => &[Mark::Nought, Mark::Cross, Mark::Triangle],
        }
    }

    /// The side whose turn follows this one.
    #[must_use]
    pub fn next(self, sides: u8) -> Mark {
        match (self, sides) {
            (Mark::Nought, _) => Mark::Cross,
            (Mark::Cross, 2) => Mark::Nought,
            (Mark::Cross, _) => Mark::Triangle,
            (Mark::Triangle, _) => Mark::Nought,
        }
    }

    /// All sides other than this one, in turn order.
    #[must_use]
    pub fn opponents(self, sides: u8) -> Vec<Mark> {
        Mark::roster(sides)
            .iter()
            .copied()
            .filter(|&m| m != self)
            .collect()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            Mark::Nought => "O",
            Mark::Cross => "X",
            Mark::Triangle => "△",
        };
        write!(f, "{glyph}")
    }
}

/// A physical sticker, identified by the face it started on.
///
/// All stickers of a face compare equal, matching the neutral colouring of
/// the base game, but the value travels with the tile through every twist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sticker(pub Face);

impl Sticker {
    /// The sticker a freshly reset tile on `face` carries.
    #[must_use]
    pub const fn home(face: Face) -> Self {
        Self(face)
    }
}

/// Egg sub-kind. Golden eggs appear on a fixed displacement cadence and
/// place more marks when collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EggKind {
    Normal,
    Golden,
}
