//! Engine configuration loaded from TOML.
//!
//! # Configuration Priority
//!
//! 1. Environment variables (`GOMOKU_BOARD_SIZE`, `GOMOKU_SEED`, `GOMOKU_LOG_LEVEL`)
//! 2. Config file
//! 3. Built-in defaults
//!
//! ```toml
//! board_size = 15
//! seed = 7
//! log_level = "info"
//!
//! [tiers]
//! beginner_block_probability = 0.3
//! expert_depth = 6
//! expert_candidate_limit = 10
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

fn d_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}
fn d_log_level() -> String {
    "info".into()
}
fn d_block_probability() -> f64 {
    0.3
}
fn d_intermediate_depth() -> u8 {
    2
}
fn d_advance_depth() -> u8 {
    4
}
fn d_expert_depth() -> u8 {
    6
}
fn d_expert_candidate_limit() -> usize {
    10
}

/// Per-tier knobs. Defaults are the canonical tier definitions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TierSettings {
    /// Chance that Beginner looks for a block before playing randomly
    #[serde(default = "d_block_probability")]
    pub beginner_block_probability: f64,
    #[serde(default = "d_intermediate_depth")]
    pub intermediate_depth: u8,
    #[serde(default = "d_advance_depth")]
    pub advance_depth: u8,
    #[serde(default = "d_expert_depth")]
    pub expert_depth: u8,
    /// How many threat-ranked candidates Expert searches at the root
    #[serde(default = "d_expert_candidate_limit")]
    pub expert_candidate_limit: usize,
}

impl Default for TierSettings {
    fn default() -> Self {
        Self {
            beginner_block_probability: d_block_probability(),
            intermediate_depth: d_intermediate_depth(),
            advance_depth: d_advance_depth(),
            expert_depth: d_expert_depth(),
            expert_candidate_limit: d_expert_candidate_limit(),
        }
    }
}

impl TierSettings {
    /// Block probability clamped to a valid Bernoulli parameter.
    pub fn block_probability(&self) -> f64 {
        if self.beginner_block_probability.is_nan() {
            0.0
        } else {
            self.beginner_block_probability.clamp(0.0, 1.0)
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "d_board_size")]
    pub board_size: usize,
    /// Fixed RNG seed for the random tiers; fresh entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "d_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub tiers: TierSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: d_board_size(),
            seed: None,
            log_level: d_log_level(),
            tiers: TierSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        let p = self.tiers.beginner_block_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "tiers.beginner_block_probability must be within [0, 1], got {}",
                p
            )));
        }
        if self.tiers.expert_candidate_limit == 0 {
            return Err(ConfigError::Invalid(
                "tiers.expert_candidate_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a specific path, then apply environment overrides.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!("Loading config from {}", path.display());
    let config: EngineConfig = toml::from_str(&content)?;
    let config = apply_env_overrides(config);
    config.validate()?;
    Ok(config)
}

/// Apply `GOMOKU_*` environment overrides on top of `config`.
pub fn apply_env_overrides(config: EngineConfig) -> EngineConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides<F>(mut config: EngineConfig, lookup: F) -> EngineConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("GOMOKU_BOARD_SIZE") {
        match v.parse() {
            Ok(size) => config.board_size = size,
            Err(_) => warn!("Ignoring GOMOKU_BOARD_SIZE={}: not a number", v),
        }
    }
    if let Some(v) = lookup("GOMOKU_SEED") {
        match v.parse() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => warn!("Ignoring GOMOKU_SEED={}: not a number", v),
        }
    }
    if let Some(v) = lookup("GOMOKU_LOG_LEVEL") {
        config.log_level = v;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 15);
        assert_eq!(config.seed, None);
        assert_eq!(config.tiers.intermediate_depth, 2);
        assert_eq!(config.tiers.advance_depth, 4);
        assert_eq!(config.tiers.expert_depth, 6);
        assert_eq!(config.tiers.expert_candidate_limit, 10);
        assert!((config.tiers.beginner_block_probability - 0.3).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            board_size = 19
            seed = 42

            [tiers]
            expert_depth = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tiers.expert_depth, 4);
        assert_eq!(config.tiers.advance_depth, 4);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rejects_bad_board_size() {
        let err = EngineConfig::from_toml_str("board_size = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = EngineConfig::from_toml_str("[tiers]\nbeginner_block_probability = 1.5")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_candidate_limit() {
        let err =
            EngineConfig::from_toml_str("[tiers]\nexpert_candidate_limit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = EngineConfig::from_toml_str("board_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_path("/nonexistent/gomoku.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = apply_overrides(EngineConfig::default(), |key| match key {
            "GOMOKU_BOARD_SIZE" => Some("19".into()),
            "GOMOKU_SEED" => Some("not-a-seed".into()),
            "GOMOKU_LOG_LEVEL" => Some("debug".into()),
            _ => None,
        });
        assert_eq!(config.board_size, 19);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_block_probability_is_clamped() {
        let mut tiers = TierSettings::default();
        tiers.beginner_block_probability = f64::NAN;
        assert_eq!(tiers.block_probability(), 0.0);
        tiers.beginner_block_probability = 2.0;
        assert_eq!(tiers.block_probability(), 1.0);
    }
}
