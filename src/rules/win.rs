//! Win condition checking
//!
//! Every winning line is listed in [`LINES`]; both lookups walk that table
//! in order, so rows are reported before columns and columns before
//! diagonals.

use crate::board::{Board, Mark, TOTAL_CELLS};

/// The eight winning triples of cell indices
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[inline]
fn is_uniform(board: &Board, [a, b, c]: [usize; 3]) -> bool {
    let mark = board.get(a);
    !mark.is_empty() && mark == board.get(b) && mark == board.get(c)
}

/// Find the first winning line, if any
///
/// Used to decide which cells get the win highlight.
pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.iter().copied().find(|&line| is_uniform(board, line))
}

/// Check for a winner
///
/// Returns `Some(mark)` if a line holds three of that mark. `None` only means
/// nobody has won; it says nothing about a tie.
pub fn find_winning_mark(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|[a, _, _]| board.get(a))
}

/// Tie: nine moves played and no winning line
///
/// A full board with a line is a win, never a tie.
pub fn is_tie(board: &Board, moves_played: usize) -> bool {
    moves_played == TOTAL_CELLS && find_winning_mark(board).is_none()
}
