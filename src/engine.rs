//! Main AI Engine integrating all search components
//!
//! This module provides the engine that turns a board, a side to move and a
//! difficulty tier into a move. The tier is first resolved into a
//! [`TierProfile`], then:
//!
//! 1. **Shortcuts** (if the profile has them): own immediate win, then block
//!    the opponent's immediate win
//! 2. **Candidates**: random empty cell, neighborhood moves, or the
//!    threat-ranked top of the neighborhood
//! 3. **Alpha-Beta**: minimax over the candidates at the profile's depth, plus
//!    the profile's root bonus
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::with_default_size();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine
//!     .get_move_with_stats(&mut board, Stone::White, Difficulty::Intermediate)
//!     .unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::{EngineConfig, TierSettings};
use crate::difficulty::{CandidateStrategy, Difficulty, ScoringBonus, ShortcutChecks, TierProfile};
use crate::error::EngineError;
use crate::eval::{move_threat_score, position_weight, PatternScore};
use crate::search::{candidates, find_immediate_block, find_immediate_win, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform pick among all empty cells
    Random,
    /// Blocking the opponent's immediate five
    Block,
    /// Completing our own five
    ImmediateWin,
    /// Alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move chosen
    pub best_move: Option<Pos>,
    /// Root score of the chosen move (search score plus bonus); 0 for non-search paths
    pub score: f64,
    /// Which path produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of search nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: f64::from(PatternScore::FIVE),
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn block(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0.0,
            search_type: SearchType::Block,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn random(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0.0,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn alpha_beta(pos: Option<Pos>, score: f64, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: pos,
            score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Deterministic for every tier except Beginner, whose randomness comes from
/// the engine's own seedable RNG.
pub struct AIEngine {
    searcher: Searcher,
    rng: SmallRng,
    board_size: usize,
    tiers: TierSettings,
}

impl AIEngine {
    /// Create an engine for 15x15 boards with default tier settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an engine from a loaded configuration.
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(),
            rng,
            board_size: config.board_size,
            tiers: config.tiers.clone(),
        }
    }

    /// Create a default engine with a fixed RNG seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(&EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        })
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn tier_settings(&self) -> &TierSettings {
        &self.tiers
    }

    /// Profile the engine would follow for `tier`.
    #[must_use]
    pub fn profile(&self, tier: Difficulty) -> TierProfile {
        TierProfile::for_tier(tier, &self.tiers)
    }

    /// Get the move for `color` at `tier`.
    ///
    /// Convenience wrapper over `get_move_with_stats`.
    pub fn get_move(
        &mut self,
        board: &mut Board,
        color: Stone,
        tier: Difficulty,
    ) -> Result<Pos, EngineError> {
        self.get_move_with_stats(board, color, tier)?
            .best_move
            .ok_or(EngineError::BoardFull)
    }

    /// Get the move for `color` at `tier` with search statistics.
    ///
    /// The board is borrowed mutably for hypothetical placements and is
    /// identical to its entry state when this returns, on success or error.
    ///
    /// # Errors
    ///
    /// - `InvalidPlayer` if `color` is `Stone::Empty`
    /// - `SizeMismatch` if the board is not the configured size
    /// - `BoardFull` if no empty cell remains
    pub fn get_move_with_stats(
        &mut self,
        board: &mut Board,
        color: Stone,
        tier: Difficulty,
    ) -> Result<MoveResult, EngineError> {
        let start = Instant::now();

        if !color.is_player() {
            return Err(EngineError::InvalidPlayer(color));
        }
        if board.size() != self.board_size {
            return Err(EngineError::SizeMismatch {
                expected: self.board_size,
                actual: board.size(),
            });
        }
        if !board.has_empty() {
            warn!(%tier, "No empty cell left, reporting draw");
            return Err(EngineError::BoardFull);
        }

        let profile = self.profile(tier);
        let result = self.choose(board, color, &profile, start);

        debug!(
            %tier,
            ?color,
            path = ?result.search_type,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "Move chosen"
        );
        Ok(result)
    }

    fn choose(
        &mut self,
        board: &mut Board,
        color: Stone,
        profile: &TierProfile,
        start: Instant,
    ) -> MoveResult {
        let elapsed = || start.elapsed().as_millis() as u64;

        if profile.shortcuts == ShortcutChecks::WinThenBlock {
            if let Some(win) = find_immediate_win(board, color) {
                return MoveResult::immediate_win(win, elapsed());
            }
            if let Some(block) = find_immediate_block(board, color) {
                return MoveResult::block(block, elapsed());
            }
        }

        let moves = match profile.candidates {
            CandidateStrategy::AllEmptyRandom { block_probability } => {
                return self.random_move(board, color, block_probability, elapsed);
            }
            CandidateStrategy::Neighborhood => candidates(board),
            CandidateStrategy::ThreatRanked { limit } => threat_ranked(board, color, limit),
        };

        let size = board.size();
        self.searcher.reset();
        let result = match profile.bonus {
            ScoringBonus::None => {
                self.searcher
                    .select_root_move(board, color, profile.depth, &moves, |_| 0.0)
            }
            ScoringBonus::CenterWeight => self.searcher.select_root_move(
                board,
                color,
                profile.depth,
                &moves,
                |p| position_weight(size, p),
            ),
        };

        MoveResult::alpha_beta(result.best_move, result.score, elapsed(), result.nodes)
    }

    /// Beginner: maybe block, otherwise a uniform pick over every empty cell.
    fn random_move<F>(
        &mut self,
        board: &mut Board,
        color: Stone,
        block_probability: f64,
        elapsed: F,
    ) -> MoveResult
    where
        F: Fn() -> u64,
    {
        if self.rng.gen_bool(block_probability) {
            if let Some(block) = find_immediate_block(board, color) {
                return MoveResult::block(block, elapsed());
            }
        }
        let empties = board.empty_cells();
        match empties.choose(&mut self.rng) {
            Some(&pos) => MoveResult::random(pos, elapsed()),
            None => MoveResult::alpha_beta(None, f64::NEG_INFINITY, elapsed(), 0),
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Neighborhood candidates sorted by `move_threat_score` for `color`, best
/// first, keeping generation order among equal scores, cut to `limit`.
pub fn threat_ranked(board: &mut Board, color: Stone, limit: usize) -> Vec<Pos> {
    let mut scored: Vec<(i32, Pos)> = candidates(board)
        .into_iter()
        .map(|mov| (move_threat_score(board, mov, color), mov))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, mov)| mov).collect()
}
