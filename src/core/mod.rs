//! Core data model: faces, tiles, payload grids, the cube state, match
//! configuration, and deterministic RNG.

mod config;
mod face;
mod grid;
mod rng;
mod state;
mod tile;

pub use config::{
    MatchConfig, Ruleset, GOLDEN_EGG_INTERVAL, GOLDEN_EGG_MARKS, MAX_CREATURES,
    MAX_CREATURES_ON_FRONT, NORMAL_EGG_MARKS,
};
pub use face::Face;
pub use grid::{CubeGrid, FaceGrid};
pub use rng::GameRng;
pub use state::CubeState;
pub use tile::{EggKind, Mark, Sticker, TilePos};
