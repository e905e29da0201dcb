//! Immutable summary of a completed session.

use chrono::NaiveDateTime;

/// How a completed session ended, judged from the player's net score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionOutcome {
    Win,
    Loss,
    Draw,
}

/// The sole unit persisted to the history store.
///
/// Immutable once created by [`crate::SessionEngine::finalize_session`];
/// aborted sessions never produce one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// When the session started.
    #[cfg_attr(feature = "serde", serde(rename = "started", with = "timestamp_format"))]
    pub started_at: NaiveDateTime,

    /// When the session completed. Sort key for history display.
    #[cfg_attr(feature = "serde", serde(rename = "date", with = "timestamp_format"))]
    pub finished_at: NaiveDateTime,

    /// Player name as validated at session start.
    pub player: String,

    /// Level label ("Short", "Medium", "Long", or "Custom" for off-table
    /// round counts).
    pub level: String,

    /// Number of resolved rounds played.
    pub rounds: u32,

    /// Player's final net score.
    pub score: i32,
}

impl Summary {
    /// Classify the session from the player's perspective.
    pub fn outcome(&self) -> SessionOutcome {
        match self.score {
            s if s > 0 => SessionOutcome::Win,
            s if s < 0 => SessionOutcome::Loss,
            _ => SessionOutcome::Draw,
        }
    }
}

/// Serde adapter pinning timestamps to [`GameConfig::DATE_FORMAT`]
/// (`YYYY-MM-DD HH:MM:SS`) in the history file.
///
/// [`GameConfig::DATE_FORMAT`]: crate::GameConfig::DATE_FORMAT
#[cfg(feature = "serde")]
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::config::GameConfig;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(GameConfig::DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, GameConfig::DATE_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}
