//! Win condition checking for freestyle Gomoku
//!
//! Five or more stones in a row, in any of the four line directions, wins.
//! Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count `color` stones contiguous with `pos` along `(dr, dc)` and its opposite.
///
/// The cell at `pos` itself always counts as one, whatever it holds.
pub fn line_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 1;
    for sign in [1, -1] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        while board.contains(r, c) && board.get(Pos::from_signed(r, c)) == color {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Meant to be called on the cell that was just played: only the four lines
/// through `pos` are inspected.
#[inline]
pub fn completes_five(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| line_length(board, pos, dr, dc, color) >= 5)
}

/// Find the owner of a completed five anywhere on the board.
///
/// Scans occupied cells in row-major order and returns the first color whose
/// stone sits on a five.
pub fn find_winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .find(|&(pos, stone)| completes_five(board, pos, stone))
        .map(|(_, stone)| stone)
}

/// Check whether any completed five exists on the board.
#[inline]
pub fn has_five_anywhere(board: &Board) -> bool {
    find_winner(board).is_some()
}
