//! Game rules for freestyle Gomoku
//!
//! Only the win condition lives here; turn order and move history belong to
//! whoever owns the board.

pub mod win;

// Re-exports for convenient access
pub use win::{completes_five, find_winner, has_five_anywhere, line_length, DIRECTIONS};
