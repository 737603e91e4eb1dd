//! Line detection on a single 3x3 overlay board.

use crate::core::{FaceGrid, Mark};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Result of judging one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// No completed line.
    Open,
    /// Exactly one mark holds a completed line.
    Winner(Mark),
    /// Two or more distinct marks hold completed lines at once. A single
    /// band twist can do this: the incoming triple supplies the missing
    /// cell of two different marks' columns. Treated as a draw.
    Contested,
}

/// Whether `mark` holds any completed line on the board.
#[must_use]
pub fn has_line(board: &FaceGrid<Option<Mark>>, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(r, c)| *board.get(r, c) == Some(mark))
    })
}

/// Judge the board across all marks.
#[must_use]
pub fn line_winner(board: &FaceGrid<Option<Mark>>) -> LineOutcome {
    let mut winner = None;
    for mark in [Mark::Nought, Mark::Cross, Mark::Triangle] {
        if has_line(board, mark) {
            if winner.is_some() {
                return LineOutcome::Contested;
            }
            winner = Some(mark);
        }
    }
    match winner {
        Some(mark) => LineOutcome::Winner(mark),
        None => LineOutcome::Open,
    }
}

/// The empty cell of a line where `mark` already holds the other two,
/// i.e. the cell that completes (or blocks) a reach. Returns the first
/// such cell in fixed line order.
#[must_use]
pub fn winning_gap(board: &FaceGrid<Option<Mark>>, mark: Mark) -> Option<(usize, usize)> {
    for line in LINES {
        let values = line.map(|(r, c)| *board.get(r, c));
        let owned = values.iter().filter(|v| **v == Some(mark)).count();
        let empty = values.iter().filter(|v| v.is_none()).count();
        if owned == 2 && empty == 1 {
            let gap = values.iter().position(|v| v.is_none()).unwrap_or(0);
            return Some(line[gap]);
        }
    }
    None
}
