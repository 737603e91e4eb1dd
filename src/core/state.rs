//! The full cube state.
//!
//! ## Grids
//!
//! Two 54-tile grids: physical stickers and overlay marks. Both are
//! permuted in lockstep by every rotation, so a mark stays glued to the
//! physical tile it was printed on.
//!
//! ## Extended-ruleset collections
//!
//! Creature positions live in an index-stable list (index identity must
//! survive rotations so a presentation layer can animate "the same
//! creature" across a turn). Eggs are a position-keyed map whose entries
//! disappear on collection. A monotonic displacement counter drives the
//! golden-egg cadence.
//!
//! All bulk mutation flows through [`crate::rotation`]; the only direct
//! mutators are `place`, `clear_mark`, and the crate-internal hooks used by
//! the creature sub-phase.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::Ruleset;
use super::face::Face;
use super::grid::{CubeGrid, FaceGrid};
use super::tile::{EggKind, Mark, Sticker, TilePos};
use crate::error::OccupiedError;

/// The 6x3x3 physical grid, the matching overlay grid, and the extended
/// ruleset's positional collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeState {
    pub(crate) stickers: CubeGrid<Sticker>,
    pub(crate) overlay: CubeGrid<Option<Mark>>,
    pub(crate) creatures: SmallVec<[TilePos; 6]>,
    pub(crate) eggs: FxHashMap<TilePos, EggKind>,
    pub(crate) displacement_count: u32,
}

impl CubeState {
    /// A freshly reset state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stickers: CubeGrid::from_fn(|pos| Sticker::home(pos.face)),
            overlay: CubeGrid::filled(None),
            creatures: SmallVec::new(),
            eggs: FxHashMap::default(),
            displacement_count: 0,
        }
    }

    /// Reinitialize every sticker to its face's neutral colour, empty the
    /// overlay, and clear creatures, eggs, and the displacement counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // === Overlay ===

    /// The mark on a tile, if any.
    #[must_use]
    pub fn mark_at(&self, pos: TilePos) -> Option<Mark> {
        *self.overlay.get(pos)
    }

    /// One face's 3x3 overlay board.
    #[must_use]
    pub fn board(&self, face: Face) -> &FaceGrid<Option<Mark>> {
        self.overlay.face(face)
    }

    /// The front-facing board the win condition is judged on.
    #[must_use]
    pub fn front_board(&self) -> &FaceGrid<Option<Mark>> {
        self.board(Face::Front)
    }

    /// Place a mark on an empty tile.
    ///
    /// Fails if the tile's overlay is non-empty. Ruleset-specific
    /// placeability (creatures and eggs block tiles in the creature
    /// ruleset) is the caller's concern; check [`CubeState::is_placeable`]
    /// first.
    pub fn place(&mut self, pos: TilePos, mark: Mark) -> Result<(), OccupiedError> {
        if self.overlay.get(pos).is_some() {
            return Err(OccupiedError { pos });
        }
        self.overlay.set(pos, Some(mark));
        Ok(())
    }

    /// Whether a mark may be placed on this tile under the given ruleset.
    #[must_use]
    pub fn is_placeable(&self, pos: TilePos, ruleset: Ruleset) -> bool {
        if self.overlay.get(pos).is_some() {
            return false;
        }
        match ruleset {
            Ruleset::Classic => true,
            Ruleset::Creature => !self.has_creature_at(pos) && !self.eggs.contains_key(&pos),
        }
    }

    /// All empty, placeable tiles across the whole cube.
    #[must_use]
    pub fn placeable_tiles(&self, ruleset: Ruleset) -> Vec<TilePos> {
        TilePos::all()
            .filter(|&pos| self.is_placeable(pos, ruleset))
            .collect()
    }

    pub(crate) fn clear_mark(&mut self, pos: TilePos) {
        self.overlay.set(pos, None);
    }

    // === Stickers ===

    /// The physical sticker currently at a position.
    #[must_use]
    pub fn sticker_at(&self, pos: TilePos) -> Sticker {
        *self.stickers.get(pos)
    }

    // === Creatures ===

    /// Creature positions, index-stable across rotations.
    #[must_use]
    pub fn creatures(&self) -> &[TilePos] {
        &self.creatures
    }

    #[must_use]
    pub fn has_creature_at(&self, pos: TilePos) -> bool {
        self.creatures.contains(&pos)
    }

    // === Eggs ===

    /// The egg on a tile, if any.
    #[must_use]
    pub fn egg_at(&self, pos: TilePos) -> Option<EggKind> {
        self.eggs.get(&pos).copied()
    }

    /// Position-to-kind view of all uncollected eggs.
    #[must_use]
    pub fn eggs(&self) -> &FxHashMap<TilePos, EggKind> {
        &self.eggs
    }

    /// Total creature displacements so far this match.
    #[must_use]
    pub fn displacement_count(&self) -> u32 {
        self.displacement_count
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
