//! Participants of a session: the human player and the computer opponent.

use crate::config::GameConfig;
use crate::engine::ConfigError;
use crate::env::DiceOracle;

/// Role tag distinguishing the two participants.
///
/// Both roles share the same behavior contract; the tag exists for display
/// and as the seam where an opponent strategy would attach if one existed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticipantRole {
    Human,
    Computer,
}

/// A session participant: identity plus a cumulative score.
///
/// Created when a session starts and discarded when it ends; scores never
/// carry across sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: ParticipantRole,
    score: i32,
}

impl Participant {
    /// Create the human participant with a validated name.
    ///
    /// The name is trimmed, must be non-empty, and must not exceed
    /// [`GameConfig::MAX_NAME_CHARS`] characters.
    pub fn human(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let len = name.chars().count();
        if len > GameConfig::MAX_NAME_CHARS {
            return Err(ConfigError::NameTooLong { len });
        }
        Ok(Self {
            name: name.to_string(),
            role: ParticipantRole::Human,
            score: 0,
        })
    }

    /// Create the computer opponent with its default name.
    pub fn computer() -> Self {
        Self {
            name: GameConfig::COMPUTER_NAME.to_string(),
            role: ParticipantRole::Computer,
            score: 0,
        }
    }

    /// Draw one die roll from the oracle.
    pub fn roll_die(&self, dice: &mut dyn DiceOracle, sides: u8) -> u8 {
        dice.roll(sides)
    }

    /// Adjust the cumulative score. Unbounded; may go negative.
    pub fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
