//! Match Size Scenarios
//!
//! A match ends after a number of counterattacks that depends on board
//! size. Each scenario fixes the multiplier applied to the single
//! counterattack cost, and the miss count quoted in its report label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of players in a match
///
/// Shared operations are recorded for one player and paid by both.
pub const PLAYERS_PER_MATCH: i64 = 2;

/// Board size of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSize {
    /// Full-size board
    Normal,
    /// Reduced board (`createGame(true)`)
    Small,
}

impl MatchSize {
    /// Scenarios in report order
    pub const ALL: [MatchSize; 2] = [MatchSize::Normal, MatchSize::Small];

    /// Counterattacks played in this scenario
    pub fn counterattack_multiplier(self) -> i64 {
        match self {
            MatchSize::Normal => 62,
            MatchSize::Small => 14,
        }
    }

    /// Miss count quoted in the report label
    ///
    /// Descriptive only; not derived from the multiplier.
    pub fn misses(self) -> u32 {
        match self {
            MatchSize::Normal => 108,
            MatchSize::Small => 22,
        }
    }

    /// Report label, e.g. `Gas consumed for a normal size match with 108 misses`
    pub fn label(self) -> String {
        format!(
            "Gas consumed for a {} size match with {} misses",
            self,
            self.misses()
        )
    }
}

impl fmt::Display for MatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSize::Normal => write!(f, "normal"),
            MatchSize::Small => write!(f, "small"),
        }
    }
}
