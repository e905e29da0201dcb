//! Deterministic dice-duel logic shared across host layers.
//!
//! `bones-core` defines the canonical rules of the game: participants, round
//! resolution, the session state machine, and the summary emitted when a
//! session completes. All state mutation flows through
//! [`engine::SessionEngine`], and every source of nondeterminism (dice,
//! clock) is injected through the oracle traits in [`env`], so the full rule
//! set can be exercised with scripted rolls and fixed timestamps.
pub mod config;
pub mod engine;
pub mod env;
pub mod level;
pub mod participant;
pub mod round;
pub mod summary;

pub use config::GameConfig;
pub use engine::{ConfigError, EngineError, SessionEngine, SessionPhase};
pub use env::{Clock, DiceOracle, FixedClock, GameEnv, PcgDice, ScriptedDice, SystemClock};
pub use level::Level;
pub use participant::{Participant, ParticipantRole};
pub use round::{RoundOutcome, resolve};
pub use summary::{SessionOutcome, Summary};
