//! Immediate win and block detection
//!
//! These are the shortcut checks that let a move bypass full search: if the
//! side to move can complete five, it should; if the opponent could, the cell
//! must be taken first.

use crate::board::{Board, Pos, Stone};
use crate::rules::completes_five;

/// Find the first empty cell, in row-major order, where `color` completes five.
///
/// Each cell is tried by placing the stone, checking the lines through it and
/// removing it again. The board is unchanged on return.
pub fn find_immediate_win(board: &mut Board, color: Stone) -> Option<Pos> {
    board.empty_cells().into_iter().find(|&pos| {
        let placed = board.place_scoped(pos, color);
        completes_five(&placed, pos, color)
    })
}

/// Find the cell `color` must occupy to stop the opponent winning next move.
#[inline]
pub fn find_immediate_block(board: &mut Board, color: Stone) -> Option<Pos> {
    find_immediate_win(board, color.opponent())
}

/// Every empty cell where `color` completes five, row-major.
pub fn find_winning_moves(board: &mut Board, color: Stone) -> Vec<Pos> {
    board
        .empty_cells()
        .into_iter()
        .filter(|&pos| {
            let placed = board.place_scoped(pos, color);
            completes_five(&placed, pos, color)
        })
        .collect()
}
