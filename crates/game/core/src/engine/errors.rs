//! Error types for the session state machine.

use super::SessionPhase;

/// Configuration rejected at session setup.
///
/// Always recoverable by re-prompting; owned by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("round count must be positive")]
    RoundCountZero,

    #[error("die must have at least one face")]
    DiceSidesZero,

    #[error("player name must not be empty")]
    EmptyName,

    #[error("player name exceeds 20 characters (got {len})")]
    NameTooLong { len: usize },
}

/// Errors surfaced by [`super::SessionEngine`] operations.
///
/// `IllegalState` marks a caller bug (an operation driven outside its valid
/// phase), not a user-facing condition: integrating layers should treat it
/// as a logic fault rather than catch-and-retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("{operation} is not valid while the session is {phase}")]
    IllegalState {
        operation: &'static str,
        phase: SessionPhase,
    },
}

impl EngineError {
    pub(super) fn illegal_state(operation: &'static str, phase: SessionPhase) -> Self {
        Self::IllegalState { operation, phase }
    }
}
