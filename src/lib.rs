//! Gomoku AI Engine with four difficulty tiers
//!
//! Freestyle Gomoku move selection:
//! - Square board, 15x15 by default
//! - Five or more in a row wins
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and scoped hypothetical placement
//! - [`rules`]: Line lengths and five-in-a-row detection
//! - [`eval`]: Position evaluation and per-move threat scores
//! - [`search`]: Candidate generation, immediate threats, alpha-beta
//! - [`difficulty`]: Tiers and the profile each one runs
//! - [`engine`]: Main AI engine integrating all components
//! - [`session`]: Human-vs-AI match settings
//! - [`analysis`]: Read-only threat and suggestion queries
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::with_default_size();
//! let mut engine = AIEngine::with_seed(1);
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! let pos = engine.get_move(&mut board, Stone::White, Difficulty::Intermediate).unwrap();
//! board.place_stone(pos, Stone::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Tiers
//!
//! | Tier         | Depth | Candidates                  | Shortcuts       |
//! |--------------|-------|-----------------------------|-----------------|
//! | Beginner     | 0     | any empty cell, 30% block   | none            |
//! | Intermediate | 2     | neighborhood                | none            |
//! | Advance      | 4     | neighborhood                | none            |
//! | Expert       | 6     | top 10 by threat score      | win, then block |
//!
//! Expert also adds a center preference to each root score.

pub mod analysis;
pub mod board;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{ConfigError, EngineConfig, TierSettings};
pub use difficulty::{Difficulty, TierProfile};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::EngineError;
pub use session::Session;
