//! Difficulty tiers and the behavior profile each one maps to.
//!
//! A tier is resolved once per move request into a [`TierProfile`]; the
//! engine then follows the profile instead of branching on the tier.

use std::fmt;
use std::str::FromStr;

use crate::config::TierSettings;
use crate::error::EngineError;

/// AI difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advance,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advance,
        Difficulty::Expert,
    ];

    /// Canonical search depth of the tier
    pub fn default_depth(self) -> u8 {
        match self {
            Difficulty::Beginner => 0,
            Difficulty::Intermediate => 2,
            Difficulty::Advance => 4,
            Difficulty::Expert => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advance => "advance",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| EngineError::UnknownDifficulty(s.to_string()))
    }
}

/// Where root candidates come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateStrategy {
    /// No search: with `block_probability` take the blocking cell, else any empty cell at random
    AllEmptyRandom { block_probability: f64 },
    /// Neighborhood move generator
    Neighborhood,
    /// Neighborhood moves ranked by threat score, best `limit` kept
    ThreatRanked { limit: usize },
}

/// Direct pattern tests tried before any search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutChecks {
    None,
    /// Own immediate win first, then the opponent's
    WinThenBlock,
}

/// Extra score added to root candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringBonus {
    None,
    /// `position_weight` of the candidate cell
    CenterWeight,
}

/// Concrete recipe for choosing a move at one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    pub depth: u8,
    pub candidates: CandidateStrategy,
    pub shortcuts: ShortcutChecks,
    pub bonus: ScoringBonus,
}

impl TierProfile {
    pub fn for_tier(tier: Difficulty, settings: &TierSettings) -> Self {
        match tier {
            Difficulty::Beginner => Self {
                depth: 0,
                candidates: CandidateStrategy::AllEmptyRandom {
                    block_probability: settings.block_probability(),
                },
                shortcuts: ShortcutChecks::None,
                bonus: ScoringBonus::None,
            },
            Difficulty::Intermediate => Self {
                depth: settings.intermediate_depth,
                candidates: CandidateStrategy::Neighborhood,
                shortcuts: ShortcutChecks::None,
                bonus: ScoringBonus::None,
            },
            Difficulty::Advance => Self {
                depth: settings.advance_depth,
                candidates: CandidateStrategy::Neighborhood,
                shortcuts: ShortcutChecks::None,
                bonus: ScoringBonus::None,
            },
            Difficulty::Expert => Self {
                depth: settings.expert_depth,
                candidates: CandidateStrategy::ThreatRanked {
                    limit: settings.expert_candidate_limit.max(1),
                },
                shortcuts: ShortcutChecks::WinThenBlock,
                bonus: ScoringBonus::CenterWeight,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!("Expert".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert_eq!(" ADVANCE ".parse::<Difficulty>(), Ok(Difficulty::Advance));
        assert_eq!(
            "grandmaster".parse::<Difficulty>(),
            Err(EngineError::UnknownDifficulty("grandmaster".into()))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>(), Ok(tier));
        }
    }

    #[test]
    fn test_default_depths() {
        let depths: Vec<u8> = Difficulty::ALL.iter().map(|d| d.default_depth()).collect();
        assert_eq!(depths, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_default_profiles_match_tier_depths() {
        let settings = TierSettings::default();
        for tier in Difficulty::ALL {
            assert_eq!(TierProfile::for_tier(tier, &settings).depth, tier.default_depth());
        }
    }

    #[test]
    fn test_expert_profile() {
        let profile = TierProfile::for_tier(Difficulty::Expert, &TierSettings::default());
        assert_eq!(profile.candidates, CandidateStrategy::ThreatRanked { limit: 10 });
        assert_eq!(profile.shortcuts, ShortcutChecks::WinThenBlock);
        assert_eq!(profile.bonus, ScoringBonus::CenterWeight);
    }

    #[test]
    fn test_beginner_profile() {
        let profile = TierProfile::for_tier(Difficulty::Beginner, &TierSettings::default());
        assert_eq!(
            profile.candidates,
            CandidateStrategy::AllEmptyRandom {
                block_probability: 0.3
            }
        );
        assert_eq!(profile.shortcuts, ShortcutChecks::None);
    }

    #[test]
    fn test_search_tiers_have_no_shortcuts() {
        let settings = TierSettings::default();
        for tier in [Difficulty::Intermediate, Difficulty::Advance] {
            let profile = TierProfile::for_tier(tier, &settings);
            assert_eq!(profile.candidates, CandidateStrategy::Neighborhood);
            assert_eq!(profile.shortcuts, ShortcutChecks::None);
            assert_eq!(profile.bonus, ScoringBonus::None);
        }
    }
}
