//! Error types.
//!
//! All errors surface synchronously to the caller of the operation that
//! triggered them; none are retried internally. [`OccupiedError`] and
//! [`TurnError`] are recoverable (the caller re-prompts or picks another
//! action). [`InconsistentState`] signals an engine bug: the session logs
//! it and forcibly resets the match rather than continue corrupted.

use thiserror::Error;

use crate::core::TilePos;

/// Placement on a tile whose overlay is already occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tile {pos} is already occupied")]
pub struct OccupiedError {
    pub pos: TilePos,
}

/// A player intent the session could not carry out.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Occupied(#[from] OccupiedError),

    /// Placement on a tile blocked by a creature or an egg.
    #[error("tile {0} is blocked")]
    Blocked(TilePos),

    /// Egg collection targeting a tile with no egg.
    #[error("no egg at {0}")]
    NoEgg(TilePos),

    /// Egg collection outside the creature ruleset.
    #[error("egg collection is not part of this ruleset")]
    WrongRuleset,

    /// Any intent after the match reached a terminal verdict.
    #[error("the match has already ended")]
    MatchOver,

    /// An overlay invariant broke mid-turn; the match was forcibly reset.
    #[error(transparent)]
    Inconsistent(#[from] InconsistentState),
}

/// A creature/overlay/egg invariant violation detected defensively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("inconsistent state at {pos}: {detail}")]
pub struct InconsistentState {
    pub pos: TilePos,
    pub detail: &'static str,
}

/// Textual twist notation that names no operator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized twist notation `{0}`")]
pub struct ParseTwistError(pub String);
