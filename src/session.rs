//! Human-vs-AI match settings
//!
//! A `Session` is an ordinary value owned by whoever runs the match. It keeps
//! the tier and color choices between moves and forwards move requests to its
//! engine.

use tracing::info;

use crate::board::{Board, Stone};
use crate::config::EngineConfig;
use crate::difficulty::Difficulty;
use crate::engine::{AIEngine, MoveResult};
use crate::error::EngineError;

/// AI side of a human-vs-AI match.
pub struct Session {
    engine: AIEngine,
    difficulty: Difficulty,
    ai_color: Stone,
}

impl Session {
    /// New session: Intermediate, AI plays White.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            engine: AIEngine::with_config(config),
            difficulty: Difficulty::default(),
            ai_color: Stone::White,
        }
    }

    /// Set the tier from its name (case-insensitive).
    pub fn set_difficulty(&mut self, name: &str) -> Result<Difficulty, EngineError> {
        let tier: Difficulty = name.parse()?;
        self.difficulty = tier;
        info!(%tier, "AI difficulty set");
        Ok(tier)
    }

    /// Set the AI side: `black`/`first` or `white`/`second`.
    pub fn set_ai_color(&mut self, name: &str) -> Result<Stone, EngineError> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "black" | "first" => Stone::Black,
            "white" | "second" => Stone::White,
            _ => return Err(EngineError::UnknownColor(name.to_string())),
        };
        self.ai_color = color;
        info!(?color, "AI color set");
        Ok(color)
    }

    #[inline]
    pub fn ai_color(&self) -> Stone {
        self.ai_color
    }

    #[inline]
    pub fn human_color(&self) -> Stone {
        self.ai_color.opponent()
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Search depth the current tier runs at.
    pub fn max_depth(&self) -> u8 {
        self.engine.profile(self.difficulty).depth
    }

    #[inline]
    pub fn is_ai_turn(&self, player: Stone) -> bool {
        player == self.ai_color
    }

    /// Ask the engine for the AI's move. The board is not changed.
    pub fn ai_move(&mut self, board: &mut Board) -> Result<MoveResult, EngineError> {
        self.engine
            .get_move_with_stats(board, self.ai_color, self.difficulty)
    }

    /// Back to Intermediate with the AI on White.
    pub fn reset(&mut self) {
        self.difficulty = Difficulty::default();
        self.ai_color = Stone::White;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
