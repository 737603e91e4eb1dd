//! Match orchestration.
//!
//! [`MatchSession`] owns everything a running match needs: the cube
//! state, the side to move, the verdict, the repetition history, the
//! seeded RNG, and the built-in opponent. Callers drive it with
//! [`MatchSession::submit`]; everything that follows a player action
//! (win and draw checks, the creature sub-phase, turn handover, any
//! machine reply) runs inside that one call and is reported back in the
//! returned [`TurnReport`].
//!
//! ## Turn pipeline
//!
//! After every action (human or machine) the session, in order:
//!
//! 1. judges the front face; a win or contested board ends the match;
//! 2. records a position snapshot; a third occurrence draws the match;
//! 3. hands the turn to the next side;
//! 4. (creature ruleset) runs the creature displacement sub-phase,
//!    verifies state consistency (an inconsistency is an engine bug and
//!    forces a match reset), and re-judges the front face, since
//!    displacement can complete or break a line;
//! 5. if the side to move is machine-controlled, asks the policy for an
//!    action, applies it, and loops back to 1.

use serde::{Deserialize, Serialize};

use crate::core::{CubeState, GameRng, MatchConfig, Mark, Ruleset, TilePos};
use crate::creature::{self, Displacement};
use crate::error::TurnError;
use crate::rotation::{self, Twist};
use crate::rules::{front_verdict, DrawReason, RepetitionTracker, Snapshot, Verdict};
use crate::search::{HeuristicOpponent, OpponentAction};

/// A human player's action for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerIntent {
    /// Place the current side's mark on a tile.
    PlaceAt(TilePos),
    /// Twist the cube.
    Rotate(Twist),
    /// Collect the egg on a tile (creature ruleset only).
    CollectEgg(TilePos),
}

/// A machine side's resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentReply {
    pub side: Mark,
    pub action: OpponentAction,
    /// Marks placed by the machine's egg collection, if that was its action.
    pub egg_marks: Vec<TilePos>,
}

/// Everything that happened inside one [`MatchSession::submit`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Verdict after the whole pipeline ran.
    pub verdict: Verdict,
    /// Creature steps across all sub-phases of this call, in order.
    pub displacements: Vec<Displacement>,
    /// Marks placed by the submitting player's egg collection.
    pub egg_marks: Vec<TilePos>,
    /// Machine turns resolved within this call.
    pub replies: Vec<OpponentReply>,
}

/// A running match.
pub struct MatchSession {
    config: MatchConfig,
    state: CubeState,
    current: Mark,
    verdict: Verdict,
    history: RepetitionTracker,
    rng: GameRng,
    opponent: HeuristicOpponent,
    /// Bumped on every reset so presentation layers can discard stale
    /// animations from a previous match.
    generation: u64,
}

impl MatchSession {
    /// Start a match from the given configuration.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let mut session = Self {
            config,
            state: CubeState::new(),
            current: Mark::Nought,
            verdict: Verdict::Ongoing,
            history: RepetitionTracker::new(),
            rng: GameRng::new(config.seed),
            opponent: HeuristicOpponent::new(),
            generation: 0,
        };
        session.populate();
        session
    }

    /// Abandon the current match and start a fresh one with the same
    /// configuration and RNG stream.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state.reset();
        self.history.clear();
        self.current = Mark::Nought;
        self.verdict = Verdict::Ongoing;
        self.populate();
        tracing::info!(generation = self.generation, "match reset");
    }

    fn populate(&mut self) {
        if self.config.ruleset == Ruleset::Creature {
            creature::spawn(&mut self.state, self.config.creature_count, &mut self.rng);
        }
        self.history.record(Snapshot::capture(&self.state));
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn current_side(&self) -> Mark {
        self.current
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // === Turns ===

    /// Play one turn for the current side, then run the post-turn
    /// pipeline, including any machine turns that follow.
    ///
    /// On error the state is unchanged and the turn is still open, except
    /// for [`TurnError::Inconsistent`], which resets the match.
    pub fn submit(&mut self, intent: PlayerIntent) -> Result<TurnReport, TurnError> {
        if self.verdict.is_terminal() {
            return Err(TurnError::MatchOver);
        }

        let mut report = TurnReport::default();
        match intent {
            PlayerIntent::PlaceAt(pos) => {
                if self.state.mark_at(pos).is_none()
                    && !self.state.is_placeable(pos, self.config.ruleset)
                {
                    return Err(TurnError::Blocked(pos));
                }
                self.state.place(pos, self.current)?;
            }
            PlayerIntent::Rotate(twist) => {
                rotation::rotate(&mut self.state, twist);
            }
            PlayerIntent::CollectEgg(pos) => {
                if self.config.ruleset != Ruleset::Creature {
                    return Err(TurnError::WrongRuleset);
                }
                let placed =
                    creature::collect_egg(&mut self.state, pos, self.current, &mut self.rng)?;
                report.egg_marks.extend(placed);
            }
        }

        self.finish_turn(&mut report)?;
        report.verdict = self.verdict;
        Ok(report)
    }

    /// The post-action pipeline, looped once more for each machine turn.
    fn finish_turn(&mut self, report: &mut TurnReport) -> Result<(), TurnError> {
        loop {
            self.verdict = front_verdict(&self.state);
            if self.verdict.is_terminal() {
                return Ok(());
            }

            if self.history.record(Snapshot::capture(&self.state)) {
                self.verdict = Verdict::Drawn(DrawReason::Repetition);
                return Ok(());
            }

            self.current = self.current.next(self.config.sides);

            if self.config.ruleset == Ruleset::Creature {
                let moves = creature::displace(&mut self.state, &mut self.rng);
                report.displacements.extend(moves);
                if let Err(err) = creature::verify(&self.state) {
                    tracing::error!(pos = %err.pos, detail = err.detail, "state inconsistency");
                    self.reset();
                    return Err(err.into());
                }
            }

            // Displacement can complete or break a line on its own.
            self.verdict = front_verdict(&self.state);
            if self.verdict.is_terminal() {
                return Ok(());
            }

            if Some(self.current) != self.config.opponent {
                return Ok(());
            }

            let action = self
                .opponent
                .choose(&self.state, self.current, &self.config, &mut self.rng);
            tracing::debug!(side = %self.current, ?action, "opponent move");

            let mut reply = OpponentReply {
                side: self.current,
                action,
                egg_marks: Vec::new(),
            };
            match action {
                OpponentAction::PlaceAt(pos) => {
                    self.state.place(pos, self.current)?;
                }
                OpponentAction::Rotate(twist) => {
                    rotation::rotate(&mut self.state, twist);
                }
                OpponentAction::CollectEgg(pos) => {
                    let placed =
                        creature::collect_egg(&mut self.state, pos, self.current, &mut self.rng)?;
                    reply.egg_marks.extend(placed);
                }
                OpponentAction::Pass => {}
            }
            report.replies.push(reply);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EggKind, Face};

    fn place(face: Face, row: u8, col: u8) -> PlayerIntent {
        PlayerIntent::PlaceAt(TilePos::new(face, row, col))
    }

    #[test]
    fn test_alternating_turns() {
        let mut session = MatchSession::new(MatchConfig::new());
        assert_eq!(session.current_side(), Mark::Nought);

        session.submit(place(Face::Front, 0, 0)).unwrap();
        assert_eq!(session.current_side(), Mark::Cross);

        session.submit(place(Face::Front, 0, 1)).unwrap();
        assert_eq!(session.current_side(), Mark::Nought);
    }

    #[test]
    fn test_occupied_tile_rejected_without_losing_turn() {
        let mut session = MatchSession::new(MatchConfig::new());
        session.submit(place(Face::Front, 0, 0)).unwrap();

        let err = session.submit(place(Face::Front, 0, 0)).unwrap_err();
        assert!(matches!(err, TurnError::Occupied(_)));
        assert_eq!(session.current_side(), Mark::Cross);
    }

    #[test]
    fn test_front_line_wins_match() {
        let mut session = MatchSession::new(MatchConfig::new());
        // O: front middle row. X: elsewhere.
        session.submit(place(Face::Front, 1, 0)).unwrap();
        session.submit(place(Face::Up, 0, 0)).unwrap();
        session.submit(place(Face::Front, 1, 1)).unwrap();
        session.submit(place(Face::Up, 0, 1)).unwrap();
        let report = session.submit(place(Face::Front, 1, 2)).unwrap();

        assert_eq!(report.verdict, Verdict::Won(Mark::Nought));
        assert_eq!(session.verdict(), Verdict::Won(Mark::Nought));

        let err = session.submit(place(Face::Down, 0, 0)).unwrap_err();
        assert_eq!(err, TurnError::MatchOver);
    }

    #[test]
    fn test_rotation_is_a_full_turn() {
        let mut session = MatchSession::new(MatchConfig::new());
        session.submit(PlayerIntent::Rotate(Twist::U)).unwrap();
        assert_eq!(session.current_side(), Mark::Cross);
    }

    #[test]
    fn test_win_carried_in_by_rotation() {
        let mut session = MatchSession::new(MatchConfig::new());
        // O builds a full row on Left row 0; X wastes moves far away.
        session.submit(place(Face::Left, 0, 0)).unwrap();
        session.submit(place(Face::Down, 2, 0)).unwrap();
        session.submit(place(Face::Left, 0, 1)).unwrap();
        session.submit(place(Face::Down, 2, 1)).unwrap();
        session.submit(place(Face::Left, 0, 2)).unwrap();
        session.submit(place(Face::Down, 0, 1)).unwrap();

        // U' slides Left row 0 onto the front.
        let report = session.submit(PlayerIntent::Rotate(Twist::UInv)).unwrap();
        assert_eq!(report.verdict, Verdict::Won(Mark::Nought));
    }

    #[test]
    fn test_threefold_repetition_draws() {
        let mut session = MatchSession::new(MatchConfig::new());
        // Each U/U' pair restores the position for both players; the
        // starting position recurs until its third recording.
        let mut last = None;
        for _ in 0..4 {
            let report = session.submit(PlayerIntent::Rotate(Twist::U)).unwrap();
            last = Some(report.verdict);
            if session.verdict().is_terminal() {
                break;
            }
            let report = session.submit(PlayerIntent::Rotate(Twist::UInv)).unwrap();
            last = Some(report.verdict);
            if session.verdict().is_terminal() {
                break;
            }
        }
        assert_eq!(last, Some(Verdict::Drawn(DrawReason::Repetition)));
    }

    #[test]
    fn test_machine_opponent_replies() {
        let config = MatchConfig::new().with_opponent(Mark::Cross).with_seed(9);
        let mut session = MatchSession::new(config);

        let report = session.submit(place(Face::Up, 2, 2)).unwrap();

        assert_eq!(report.replies.len(), 1);
        assert_eq!(report.replies[0].side, Mark::Cross);
        // Empty front board: the policy takes the centre.
        assert_eq!(
            report.replies[0].action,
            OpponentAction::PlaceAt(TilePos::centre(Face::Front))
        );
        // Turn came back around to the human side.
        assert_eq!(session.current_side(), Mark::Nought);
    }

    #[test]
    fn test_creature_match_spawns_and_displaces() {
        let config = MatchConfig::new()
            .with_ruleset(Ruleset::Creature)
            .with_creature_count(3)
            .with_seed(11);
        let mut session = MatchSession::new(config);
        assert_eq!(session.state().creatures().len(), 3);

        let open = session
            .state()
            .placeable_tiles(Ruleset::Creature)
            .into_iter()
            .next()
            .unwrap();
        let report = session.submit(PlayerIntent::PlaceAt(open)).unwrap();

        // The sub-phase ran; every realized step left an egg behind.
        for step in &report.displacements {
            assert!(
                session.state().egg_at(step.from).is_some()
                    || session.state().has_creature_at(step.from)
            );
        }
        assert!(creature::verify(session.state()).is_ok());
    }

    #[test]
    fn test_egg_collection_needs_creature_ruleset() {
        let mut session = MatchSession::new(MatchConfig::new());
        let err = session
            .submit(PlayerIntent::CollectEgg(TilePos::new(Face::Front, 0, 0)))
            .unwrap_err();
        assert_eq!(err, TurnError::WrongRuleset);
    }

    #[test]
    fn test_blocked_tile_rejected_in_creature_ruleset() {
        let config = MatchConfig::new()
            .with_ruleset(Ruleset::Creature)
            .with_seed(11);
        let mut session = MatchSession::new(config);
        let blocked = session.state().creatures()[0];

        let err = session.submit(PlayerIntent::PlaceAt(blocked)).unwrap_err();
        assert_eq!(err, TurnError::Blocked(blocked));
        assert_eq!(session.current_side(), Mark::Nought);
    }

    #[test]
    fn test_collecting_an_egg_plays_the_turn() {
        let config = MatchConfig::new()
            .with_ruleset(Ruleset::Creature)
            .with_seed(13);
        let mut session = MatchSession::new(config);
        // Park the creatures so the sub-phase cannot disturb the marks
        // this test asserts on.
        session.state.creatures.clear();
        let egg_pos = TilePos::new(Face::Down, 1, 1);
        session.state.eggs.insert(egg_pos, EggKind::Golden);

        let report = session.submit(PlayerIntent::CollectEgg(egg_pos)).unwrap();

        assert!(!report.egg_marks.is_empty());
        for &pos in &report.egg_marks {
            assert_eq!(session.state().mark_at(pos), Some(Mark::Nought));
        }
        assert_eq!(session.current_side(), Mark::Cross);
    }

    #[test]
    fn test_reset_bumps_generation() {
        let mut session = MatchSession::new(MatchConfig::new());
        session.submit(place(Face::Front, 0, 0)).unwrap();

        session.reset();

        assert_eq!(session.generation(), 1);
        assert_eq!(session.current_side(), Mark::Nought);
        assert_eq!(session.verdict(), Verdict::Ongoing);
        assert_eq!(session.state().mark_at(TilePos::new(Face::Front, 0, 0)), None);
    }

    #[test]
    fn test_three_sided_rotation_of_turns() {
        let config = MatchConfig::new().with_sides(3);
        let mut session = MatchSession::new(config);

        session.submit(place(Face::Up, 0, 0)).unwrap();
        assert_eq!(session.current_side(), Mark::Cross);
        session.submit(place(Face::Up, 0, 1)).unwrap();
        assert_eq!(session.current_side(), Mark::Triangle);
        session.submit(place(Face::Up, 0, 2)).unwrap();
        assert_eq!(session.current_side(), Mark::Nought);
    }
}
