//! Pattern scores for Gomoku evaluation
//!
//! Categories are keyed on raw run length only. A run's open or blocked ends
//! are not inspected.

/// Per-direction scores used by the board evaluation.
///
/// Each category is an order of magnitude above the next one, so no
/// combination of shorter runs through a single stone can outscore one
/// longer run.
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 100_000;
    /// Run of four
    pub const FOUR: i32 = 10_000;
    /// Run of three
    pub const THREE: i32 = 1_000;
    /// Run of two
    pub const TWO: i32 = 100;
    pub const NONE: i32 = 0;

    /// Score for a run of `len` stones.
    #[inline]
    pub fn for_run(len: usize) -> i32 {
        match len {
            5.. => Self::FIVE,
            4 => Self::FOUR,
            3 => Self::THREE,
            2 => Self::TWO,
            _ => Self::NONE,
        }
    }
}

/// Coarser per-direction weights for ranking candidate moves.
pub struct ThreatWeight;

impl ThreatWeight {
    /// Four or longer
    pub const FOUR: i32 = 1_000;
    pub const THREE: i32 = 100;
    pub const TWO: i32 = 10;

    #[inline]
    pub fn for_run(len: usize) -> i32 {
        match len {
            4.. => Self::FOUR,
            3 => Self::THREE,
            2 => Self::TWO,
            _ => 0,
        }
    }
}
