//! Rule engine: win/draw detection and match verdicts.

mod lines;
mod repetition;

pub use lines::{has_line, line_winner, winning_gap, LineOutcome, LINES};
pub use repetition::{RepetitionTracker, Snapshot};

use serde::{Deserialize, Serialize};

use crate::core::{CubeState, Mark};

/// Why a match was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    /// The same full position occurred for the third time.
    Repetition,
    /// Two sides completed lines in the same turn.
    Contested,
}

/// Match status after a turn. `Won` and `Drawn` are terminal until an
/// explicit reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Ongoing,
    Won(Mark),
    Drawn(DrawReason),
}

impl Verdict {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Verdict::Ongoing
    }
}

/// Judge the front-facing board of a state.
#[must_use]
pub fn front_verdict(state: &CubeState) -> Verdict {
    match line_winner(state.front_board()) {
        LineOutcome::Open => Verdict::Ongoing,
        LineOutcome::Winner(mark) => Verdict::Won(mark),
        LineOutcome::Contested => Verdict::Drawn(DrawReason::Contested),
    }
}
