//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - Immediate win / block detection
//! - Alpha-Beta minimax over a shared, place/undo board

pub mod alphabeta;
pub mod movegen;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, INF};
pub use movegen::candidates;
pub use threat::{find_immediate_block, find_immediate_win, find_winning_moves};
