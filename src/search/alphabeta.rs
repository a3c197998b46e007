//! Depth-limited minimax with alpha-beta pruning
//!
//! The search mutates one shared board. Every hypothetical stone is placed
//! through `Board::place_scoped`, so the board is back to its entry state
//! whenever a call returns, including on cutoffs.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::{candidates, Searcher};
//!
//! let mut board = Board::with_default_size();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new();
//! let moves = candidates(&board);
//! let result = searcher.select_root_move(&mut board, Stone::White, 1, &moves, |_| 0.0);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use tracing::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::board_value;
use crate::rules::has_five_anywhere;

use super::movegen::candidates;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Outcome of a root move selection.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any candidate was given
    pub best_move: Option<Pos>,
    /// Search score of the best move plus its root bonus
    pub score: f64,
    /// Nodes visited by this selection
    pub nodes: u64,
}

/// Alpha-beta searcher. Holds only statistics; the board is passed in.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited since the last `reset`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `root` is the maximizing player; the side to move here is `root` when
    /// `maximizing`, its opponent otherwise. Leaves (depth 0, a completed five
    /// anywhere, or no empty cell) are scored with `board_value(board, root)`.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        root: Stone,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || has_five_anywhere(board) {
            return board_value(board, root);
        }

        let moves = candidates(board);
        if moves.is_empty() {
            return board_value(board, root);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                let score = {
                    let mut child = board.place_scoped(mov, root);
                    self.search(&mut child, depth - 1, false, root, alpha, beta)
                };
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mover = root.opponent();
            let mut best = INF;
            for mov in moves {
                let score = {
                    let mut child = board.place_scoped(mov, mover);
                    self.search(&mut child, depth - 1, true, root, alpha, beta)
                };
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Pick the root move for `root` among `moves`.
    ///
    /// Each move is played for `root`, scored by `search` at `depth` with the
    /// opponent to reply, and then adjusted by `bonus`. The strictly highest
    /// total wins; ties keep the earliest move in `moves`.
    pub fn select_root_move<F>(
        &mut self,
        board: &mut Board,
        root: Stone,
        depth: u8,
        moves: &[Pos],
        bonus: F,
    ) -> SearchResult
    where
        F: Fn(Pos) -> f64,
    {
        let start_nodes = self.nodes;
        let mut best: Option<(Pos, f64)> = None;

        for &mov in moves {
            let raw = {
                let mut child = board.place_scoped(mov, root);
                self.search(&mut child, depth, false, root, -INF, INF)
            };
            let score = f64::from(raw) + bonus(mov);
            trace!(row = mov.row, col = mov.col, raw, score, "root candidate");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mov, score));
            }
        }

        SearchResult {
            best_move: best.map(|(mov, _)| mov),
            score: best.map_or(f64::NEG_INFINITY, |(_, score)| score),
            nodes: self.nodes - start_nodes,
        }
    }
}
