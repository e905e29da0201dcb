//! Selectable game levels and their round counts.

use strum::IntoEnumIterator;

/// Game length selected by the player before a session starts.
///
/// Exactly three levels are selectable; choosing a round count outside this
/// table is an input-validation concern of the presentation layer, not an
/// engine error.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    Short,
    Medium,
    Long,
}

impl Level {
    /// Number of rounds played at this level.
    pub const fn rounds(self) -> u32 {
        match self {
            Level::Short => 5,
            Level::Medium => 8,
            Level::Long => 10,
        }
    }

    /// Look up the level for a round count, if it matches the table.
    pub fn from_rounds(rounds: u32) -> Option<Self> {
        Level::iter().find(|level| level.rounds() == rounds)
    }

    /// Fixed display label ("Short", "Medium", "Long").
    pub fn label(self) -> &'static str {
        match self {
            Level::Short => "Short",
            Level::Medium => "Medium",
            Level::Long => "Long",
        }
    }
}
