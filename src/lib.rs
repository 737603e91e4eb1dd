//! # cube-oxo
//!
//! A deterministic engine for noughts-and-crosses played on the faces of
//! a 3x3x3 twisty cube. Players either place a mark on any of the 54
//! tiles or twist one of the cube's nine layers; only the front-facing
//! 3x3 board is judged, so a line built anywhere can be rotated into
//! view, and rotated away again.
//!
//! ## Layers
//!
//! - [`core`]: faces, tiles, marks, the dual-grid [`CubeState`], the
//!   seeded [`GameRng`], and [`MatchConfig`]
//! - [`rotation`]: the sixteen twist operators as precomputed tile
//!   permutations, applied atomically to every payload
//! - [`rules`]: line detection on the front board, verdicts, and
//!   threefold-repetition tracking
//! - [`creature`]: the extended ruleset's roaming blockers and the egg
//!   economy they feed
//! - [`search`]: the built-in heuristic opponent
//! - [`session`]: the [`MatchSession`] turn pipeline tying it together
//!
//! ## Example
//!
//! ```
//! use cube_oxo::{MatchConfig, MatchSession, PlayerIntent, Twist, Verdict};
//! use cube_oxo::core::{Face, TilePos};
//!
//! let mut session = MatchSession::new(MatchConfig::new());
//! session.submit(PlayerIntent::PlaceAt(TilePos::new(Face::Front, 1, 1)))?;
//! session.submit(PlayerIntent::Rotate(Twist::U))?;
//! assert_eq!(session.verdict(), Verdict::Ongoing);
//! # Ok::<(), cube_oxo::TurnError>(())
//! ```
//!
//! Every source of randomness flows from the configured seed, so a
//! (config, intent sequence) pair replays to an identical match.

pub mod core;
pub mod creature;
pub mod error;
pub mod rotation;
pub mod rules;
pub mod search;
pub mod session;

pub use crate::core::{CubeState, GameRng, Mark, MatchConfig, Ruleset, TilePos};
pub use crate::error::{OccupiedError, TurnError};
pub use crate::rotation::{Permutation, Twist};
pub use crate::rules::{DrawReason, Verdict};
pub use crate::search::{HeuristicOpponent, OpponentAction};
pub use crate::session::{MatchSession, PlayerIntent, TurnReport};
