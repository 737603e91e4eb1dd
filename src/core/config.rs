//! Match configuration, set once per match.

use serde::{Deserialize, Serialize};

use super::tile::Mark;

/// Every Nth creature displacement deposits a golden egg instead of a
/// normal one.
pub const GOLDEN_EGG_INTERVAL: u32 = 10;

/// Marks placed when a normal egg is collected.
pub const NORMAL_EGG_MARKS: usize = 2;

/// Marks placed when a golden egg is collected.
pub const GOLDEN_EGG_MARKS: usize = 5;

/// Upper bound on creatures per match.
pub const MAX_CREATURES: usize = 6;

/// At most this many creatures spawn on the front face.
pub const MAX_CREATURES_ON_FRONT: usize = 2;

/// Which rule variant a match plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruleset {
    /// Marks and twists only.
    Classic,
    /// Adds mobile creatures that block tiles and deposit collectable eggs.
    Creature,
}

/// Per-match parameters.
///
/// Built with chained setters:
///
/// ```
/// use cube_oxo::core::{MatchConfig, Mark, Ruleset};
///
/// let config = MatchConfig::new()
///     .with_sides(3)
///     .with_opponent(Mark::Cross)
///     .with_ruleset(Ruleset::Creature)
///     .with_creature_count(2)
///     .with_seed(42);
/// assert_eq!(config.sides, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of sides playing (2 or 3).
    pub sides: u8,
    /// The machine-controlled side, if any.
    pub opponent: Option<Mark>,
    /// Rule variant.
    pub ruleset: Ruleset,
    /// Creatures to spawn in the creature ruleset (clamped 1..=MAX_CREATURES).
    pub creature_count: usize,
    /// RNG seed for the match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sides: 2,
            opponent: None,
            ruleset: Ruleset::Classic,
            creature_count: 1,
            seed: 0,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sides(mut self, sides: u8) -> Self {
        assert!((2..=3).contains(&sides), "sides must be 2 or 3");
        self.sides = sides;
        self
    }

    #[must_use]
    pub fn with_opponent(mut self, side: Mark) -> Self {
        self.opponent = Some(side);
        self
    }

    #[must_use]
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    #[must_use]
    pub fn with_creature_count(mut self, count: usize) -> Self {
        self.creature_count = count.clamp(1, MAX_CREATURES);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
