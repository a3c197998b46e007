//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the leaf evaluation for the minimax search and the
//! cheaper per-move scores used for candidate ordering:
//! - Run-length scoring through each stone, four directions
//! - Threat level of a single hypothetical move
//! - Center bonus for root move selection

use crate::board::{Board, Pos, Stone};
use crate::rules::{line_length, DIRECTIONS};

use super::patterns::{PatternScore, ThreatWeight};

/// Length of the contiguous run of `color` through `pos` along `(dr, dc)`.
///
/// Counts both ways from `pos` and includes `pos` itself.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    line_length(board, pos, dr, dc, color)
}

/// Sum of run-length category scores through `pos` over all four directions.
pub fn position_value(board: &Board, pos: Pos, color: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| PatternScore::for_run(run_length(board, pos, dr, dc, color)))
        .sum()
}

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
///
/// Every stone contributes its `position_value` for its owner, so a run of
/// length k is counted once per stone in it.
#[must_use]
pub fn board_value(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    board
        .occupied()
        .map(|(pos, stone)| {
            if stone == color {
                position_value(board, pos, color)
            } else if stone == opponent {
                -position_value(board, pos, opponent)
            } else {
                0
            }
        })
        .sum()
}

/// Threat level of playing `color` at the empty cell `mov`.
///
/// The stone is placed for the duration of the scan and removed before
/// returning.
pub fn move_threat_score(board: &mut Board, mov: Pos, color: Stone) -> i32 {
    let placed = board.place_scoped(mov, color);
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| ThreatWeight::for_run(run_length(&placed, mov, dr, dc, color)))
        .sum()
}

/// Center preference: `(size/2 - euclidean distance to center) * 10`.
///
/// Negative near the corners of large boards. Only ever added at the root.
#[must_use]
pub fn position_weight(board_size: usize, pos: Pos) -> f64 {
    let center = (board_size / 2) as f64;
    let dr = f64::from(pos.row) - center;
    let dc = f64::from(pos.col) - center;
    (center - (dr * dr + dc * dc).sqrt()) * 10.0
}
