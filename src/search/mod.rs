//! The built-in machine opponent.
//!
//! A one-ply heuristic policy, not a tree search: each rule in a fixed
//! priority ladder is tried in order and the first that produces a legal
//! action wins. Twist exploration uses [`simulate`](crate::rotation::simulate)
//! so candidate rotations never touch the live state, and the pre-emptive
//! block maps a threatened cell backwards through the twist's
//! [`Permutation`] to find where to place *before* the twist happens.
//!
//! The ladder, top to bottom:
//!
//! 1. collect an egg, golden anywhere, else one on the front face
//!    (creature ruleset only);
//! 2. complete an own line on the front face by placing;
//! 3. complete an own line with a single twist;
//! 4. block an opponent's completed-line threat by placing in the gap;
//! 5. block a threat an opponent could create with one twist, by placing
//!    on the pre-twist source tile (base ruleset only);
//! 6. twist to give ourselves a two-in-a-row reach (base ruleset only);
//! 7. take the front centre;
//! 8. take a random free front corner;
//! 9. place anywhere placeable, or pass.
//!
//! Steps 5 and 6 are disabled in the creature ruleset: with creatures
//! shuffling the board every turn, speculative positional play is wasted
//! effort and egg economy dominates instead.

use serde::{Deserialize, Serialize};

use crate::core::{CubeState, Face, GameRng, MatchConfig, Mark, Ruleset, TilePos};
use crate::rotation::{simulate, Permutation, Twist};
use crate::rules::{has_line, winning_gap};

/// What the machine opponent decided to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentAction {
    PlaceAt(TilePos),
    Rotate(Twist),
    CollectEgg(TilePos),
    /// No legal action existed (every tile blocked or occupied).
    Pass,
}

/// The heuristic policy. Stateless; all variation comes from the match
/// RNG passed into [`HeuristicOpponent::choose`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicOpponent;

impl HeuristicOpponent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Pick an action for `side` on the given state.
    ///
    /// Deterministic up to the RNG: the same state, config, and RNG
    /// stream always yield the same action.
    #[must_use]
    pub fn choose(
        &self,
        state: &CubeState,
        side: Mark,
        config: &MatchConfig,
        rng: &mut GameRng,
    ) -> OpponentAction {
        let board = state.front_board();

        // 1. Egg economy beats positional play.
        if config.ruleset == Ruleset::Creature {
            if let Some(pos) = Self::best_egg(state) {
                return OpponentAction::CollectEgg(pos);
            }
        }

        // 2. Win by placing.
        if let Some((r, c)) = winning_gap(board, side) {
            let pos = TilePos::new(Face::Front, r as u8, c as u8);
            if state.is_placeable(pos, config.ruleset) {
                return OpponentAction::PlaceAt(pos);
            }
        }

        // 3. Win by twisting.
        for twist in Twist::ALL {
            if has_line(simulate(state, twist).front_board(), side) {
                return OpponentAction::Rotate(twist);
            }
        }

        // 4. Block an immediate threat.
        for opponent in side.opponents(config.sides) {
            if let Some((r, c)) = winning_gap(board, opponent) {
                let pos = TilePos::new(Face::Front, r as u8, c as u8);
                if state.is_placeable(pos, config.ruleset) {
                    return OpponentAction::PlaceAt(pos);
                }
            }
        }

        if config.ruleset == Ruleset::Classic {
            // 5. Block a threat one twist away: find the tile that will
            // land on the gap and claim it while it is still reachable.
            for twist in Twist::ALL {
                let after = simulate(state, twist);
                for opponent in side.opponents(config.sides) {
                    if let Some((r, c)) = winning_gap(after.front_board(), opponent) {
                        let target = TilePos::new(Face::Front, r as u8, c as u8);
                        let source = Permutation::of(twist).source(target);
                        if state.mark_at(source).is_none() {
                            return OpponentAction::PlaceAt(source);
                        }
                    }
                }
            }

            // 6. Build a reach by twisting.
            for twist in Twist::ALL {
                if winning_gap(simulate(state, twist).front_board(), side).is_some() {
                    return OpponentAction::Rotate(twist);
                }
            }
        }

        // 7. Centre, 8. random corner.
        let centre = TilePos::centre(Face::Front);
        if state.is_placeable(centre, config.ruleset) {
            return OpponentAction::PlaceAt(centre);
        }
        let mut corners = TilePos::corners(Face::Front);
        rng.shuffle(&mut corners);
        if let Some(&pos) = corners
            .iter()
            .find(|&&pos| state.is_placeable(pos, config.ruleset))
        {
            return OpponentAction::PlaceAt(pos);
        }

        // 9. Anywhere at all.
        let open = state.placeable_tiles(config.ruleset);
        match rng.choose(&open) {
            Some(&pos) => OpponentAction::PlaceAt(pos),
            None => OpponentAction::Pass,
        }
    }

    /// The egg worth collecting: any golden egg, else an egg on the front
    /// face. Lowest tile index breaks ties so the choice is stable.
    fn best_egg(state: &CubeState) -> Option<TilePos> {
        let golden = state
            .eggs()
            .iter()
            .filter(|(_, kind)| **kind == crate::core::EggKind::Golden)
            .map(|(&pos, _)| pos)
            .min_by_key(|pos| pos.index());
        golden.or_else(|| {
            state
                .eggs()
                .keys()
                .filter(|pos| pos.face == Face::Front)
                .copied()
                .min_by_key(|pos| pos.index())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EggKind;
    use crate::rules::{line_winner, LineOutcome};

    fn classic() -> MatchConfig {
        MatchConfig::new().with_opponent(Mark::Cross)
    }

    fn creature() -> MatchConfig {
        classic().with_ruleset(Ruleset::Creature)
    }

    fn choose(state: &CubeState, config: &MatchConfig) -> OpponentAction {
        let mut rng = GameRng::new(0);
        HeuristicOpponent::new().choose(state, Mark::Cross, config, &mut rng)
    }

    #[test]
    fn test_takes_winning_placement() {
        let mut state = CubeState::new();
        state.place(TilePos::new(Face::Front, 0, 0), Mark::Cross).unwrap();
        state.place(TilePos::new(Face::Front, 0, 1), Mark::Cross).unwrap();

        assert_eq!(
            choose(&state, &classic()),
            OpponentAction::PlaceAt(TilePos::new(Face::Front, 0, 2))
        );
    }

    #[test]
    fn test_takes_winning_rotation() {
        // A full Cross row on Left slides onto the front under U'.
        let mut state = CubeState::new();
        for c in 0..3 {
            state.place(TilePos::new(Face::Left, 0, c), Mark::Cross).unwrap();
        }

        let action = choose(&state, &classic());
        let OpponentAction::Rotate(twist) = action else {
            panic!("expected a rotation, got {action:?}");
        };
        let after = simulate(&state, twist);
        assert!(has_line(after.front_board(), Mark::Cross));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut state = CubeState::new();
        state.place(TilePos::new(Face::Front, 2, 0), Mark::Nought).unwrap();
        state.place(TilePos::new(Face::Front, 2, 2), Mark::Nought).unwrap();

        assert_eq!(
            choose(&state, &classic()),
            OpponentAction::PlaceAt(TilePos::new(Face::Front, 2, 1))
        );
    }

    #[test]
    fn test_preemptive_block_lands_on_gap_after_twist() {
        // Right row 1 holds two Noughts. An E twist would slide that row
        // onto the front as a two-in-a-row with its gap at (1,2); the
        // pre-twist source of that gap is Right (1,2), so the policy
        // claims it before the threat can materialize.
        let mut state = CubeState::new();
        state.place(TilePos::new(Face::Right, 1, 0), Mark::Nought).unwrap();
        state.place(TilePos::new(Face::Right, 1, 1), Mark::Nought).unwrap();

        let action = choose(&state, &classic());
        let expected = TilePos::new(Face::Right, 1, 2);
        assert_eq!(action, OpponentAction::PlaceAt(expected));
        assert_eq!(
            Permutation::of(Twist::E).source(TilePos::new(Face::Front, 1, 2)),
            expected
        );
    }

    #[test]
    fn test_prefers_centre_on_empty_board() {
        let state = CubeState::new();
        assert_eq!(
            choose(&state, &classic()),
            OpponentAction::PlaceAt(TilePos::centre(Face::Front))
        );
    }

    #[test]
    fn test_takes_corner_when_centre_taken() {
        let mut state = CubeState::new();
        state.place(TilePos::centre(Face::Front), Mark::Nought).unwrap();

        let action = choose(&state, &classic());
        let OpponentAction::PlaceAt(pos) = action else {
            panic!("expected a placement, got {action:?}");
        };
        assert!(TilePos::corners(Face::Front).contains(&pos));
    }

    #[test]
    fn test_collects_golden_egg_first() {
        let mut state = CubeState::new();
        state.eggs.insert(TilePos::new(Face::Front, 0, 0), EggKind::Normal);
        let golden = TilePos::new(Face::Back, 2, 2);
        state.eggs.insert(golden, EggKind::Golden);

        assert_eq!(choose(&state, &creature()), OpponentAction::CollectEgg(golden));
    }

    #[test]
    fn test_collects_front_egg_over_placement() {
        let mut state = CubeState::new();
        let egg = TilePos::new(Face::Front, 2, 0);
        state.eggs.insert(egg, EggKind::Normal);
        // An off-front normal egg is not worth a detour.
        state.eggs.insert(TilePos::new(Face::Up, 0, 0), EggKind::Normal);

        assert_eq!(choose(&state, &creature()), OpponentAction::CollectEgg(egg));
    }

    #[test]
    fn test_ignores_off_front_normal_eggs() {
        let mut state = CubeState::new();
        state.eggs.insert(TilePos::new(Face::Up, 0, 0), EggKind::Normal);

        assert_eq!(
            choose(&state, &creature()),
            OpponentAction::PlaceAt(TilePos::centre(Face::Front))
        );
    }

    #[test]
    fn test_passes_on_full_board() {
        // Every tile Triangle: Cross has no gap to fill, no line to twist
        // in, nothing to block, and nowhere to place.
        let mut state = CubeState::new();
        for pos in TilePos::all() {
            state.place(pos, Mark::Triangle).unwrap();
        }

        assert_eq!(choose(&state, &classic()), OpponentAction::Pass);
        assert_eq!(line_winner(state.front_board()), LineOutcome::Winner(Mark::Triangle));
    }
}
