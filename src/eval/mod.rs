//! Position evaluation for Gomoku
//!
//! - [`heuristic`]: board evaluation, move threat scores, center weight
//! - [`patterns`]: score constants per run length

pub mod heuristic;
pub mod patterns;

pub use heuristic::{
    board_value, move_threat_score, position_value, position_weight, run_length,
};
pub use patterns::{PatternScore, ThreatWeight};
