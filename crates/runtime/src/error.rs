//! Top-level error surface for layers driving the runtime.

use bones_core::EngineError;

use crate::repository::HistoryError;

/// Errors (and the one non-error terminal outcome) a presentation layer
/// sees when driving a session end to end.
///
/// `Aborted` represents the player's explicit exit to the menu. It is a
/// normal terminal state propagated as a distinct variant so callers never
/// conflate it with a real failure.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("history persistence error: {0}")]
    History(#[from] HistoryError),

    #[error("session aborted by the player")]
    Aborted,
}

impl RuntimeError {
    /// True for the user-abort outcome, which callers should treat as a
    /// normal return to the menu rather than a failure.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bones_core::ConfigError;

    #[test]
    fn engine_and_history_errors_convert() {
        let engine: RuntimeError = EngineError::from(ConfigError::RoundCountZero).into();
        assert!(matches!(engine, RuntimeError::Engine(_)));
        assert!(!engine.is_abort());

        let history: RuntimeError = HistoryError::InvalidPageSize.into();
        assert!(matches!(history, RuntimeError::History(_)));
    }

    #[test]
    fn abort_is_not_a_failure() {
        assert!(RuntimeError::Aborted.is_abort());
        assert_eq!(
            RuntimeError::Aborted.to_string(),
            "session aborted by the player"
        );
    }
}
