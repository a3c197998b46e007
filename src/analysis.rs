//! Read-only position analysis
//!
//! Queries here never touch the caller's board: each one clones it once and
//! runs the place/undo helpers on the copy.

use crate::board::{Board, Pos, Stone};
use crate::eval::{board_value, move_threat_score};
use crate::search::{candidates, find_winning_moves};

/// Every empty cell where `player` completes five, row-major.
pub fn threat_points(board: &Board, player: Stone) -> Vec<Pos> {
    let mut scratch = board.clone();
    find_winning_moves(&mut scratch, player)
}

/// Immediate tactical picture for the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreatReport {
    pub to_move: Stone,
    /// Cells where `to_move` wins at once
    pub winning: Vec<Pos>,
    /// Cells where the opponent would win next
    pub must_block: Vec<Pos>,
    /// `board_value` from `to_move`'s side
    pub board_value: i32,
}

impl ThreatReport {
    pub fn analyze(board: &Board, to_move: Stone) -> Self {
        let mut scratch = board.clone();
        Self {
            to_move,
            winning: find_winning_moves(&mut scratch, to_move),
            must_block: find_winning_moves(&mut scratch, to_move.opponent()),
            board_value: board_value(&scratch, to_move),
        }
    }

    /// The opponent has two or more winning cells and `to_move` has none.
    pub fn is_lost(&self) -> bool {
        self.winning.is_empty() && self.must_block.len() > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Win,
    Block,
    Attack,
    Develop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub pos: Pos,
    pub kind: SuggestionKind,
    /// `move_threat_score` of the cell for the side to move
    pub threat: i32,
}

/// Up to `max` suggested moves for `to_move`, most urgent first.
///
/// Winning cells come first, then cells the opponent wins on, then the
/// remaining candidates by threat score (ties keep generation order).
pub fn suggest_moves(board: &Board, to_move: Stone, max: usize) -> Vec<Suggestion> {
    let mut scratch = board.clone();
    let mut out: Vec<Suggestion> = Vec::new();

    let wins = find_winning_moves(&mut scratch, to_move);
    let blocks = find_winning_moves(&mut scratch, to_move.opponent());

    let mut ranked: Vec<(i32, Pos)> = candidates(&scratch)
        .into_iter()
        .map(|pos| (move_threat_score(&mut scratch, pos, to_move), pos))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let urgent = wins
        .into_iter()
        .map(|pos| (pos, SuggestionKind::Win))
        .chain(blocks.into_iter().map(|pos| (pos, SuggestionKind::Block)));
    for (pos, kind) in urgent {
        let threat = move_threat_score(&mut scratch, pos, to_move);
        push_unique(&mut out, Suggestion { pos, kind, threat });
    }
    for (threat, pos) in ranked {
        let kind = if threat > 0 {
            SuggestionKind::Attack
        } else {
            SuggestionKind::Develop
        };
        push_unique(&mut out, Suggestion { pos, kind, threat });
    }

    out.truncate(max);
    out
}

fn push_unique(out: &mut Vec<Suggestion>, s: Suggestion) {
    if !out.iter().any(|o| o.pos == s.pos) {
        out.push(s);
    }
}
