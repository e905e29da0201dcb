//! Session state machine: round play, tie re-rolls, and summarization.
//!
//! [`SessionEngine`] is the authoritative reducer for a single session. The
//! caller (a menu/terminal layer) drives it one round at a time and receives
//! each [`RoundOutcome`] for display; at the end it receives the [`Summary`]
//! to persist. Early exit is a first-class transition into an absorbing
//! phase, not an error thrown across layers.

mod errors;

pub use errors::{ConfigError, EngineError};

use chrono::NaiveDateTime;

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::level::Level;
use crate::participant::Participant;
use crate::round::{self, RoundOutcome};
use crate::summary::Summary;

/// Phase of the session lifecycle.
///
/// `AbortedEarly` is absorbing and reachable only from `InProgress` via an
/// explicit exit request, never spontaneously.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
    AbortedEarly,
}

/// Drives a fixed number of rounds between the player and the computer.
///
/// Invariants:
/// - `current_round <= total_rounds` at all times
/// - a round is counted only once its rolls differ; ties are re-rolled
/// - the player's score is the net signed sum of round deltas, while the
///   computer's counter only ever accrues the margins of rounds it wins
///   (it never decreases — a historical scoring quirk kept on purpose)
pub struct SessionEngine {
    config: GameConfig,
    phase: SessionPhase,
    player: Option<Participant>,
    computer: Participant,
    total_rounds: u32,
    current_round: u32,
    started_at: Option<NaiveDateTime>,
}

impl SessionEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: SessionPhase::NotStarted,
            player: None,
            computer: Participant::computer(),
            total_rounds: 0,
            current_round: 0,
            started_at: None,
        }
    }

    /// Begin a session: validate configuration, reset scores, and record the
    /// start timestamp.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a zero round count, a zero-sided die, or
    /// a bad player name; `IllegalState` when the session already started.
    pub fn start_session(
        &mut self,
        total_rounds: u32,
        player_name: &str,
        env: &mut GameEnv<'_>,
    ) -> Result<(), EngineError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(EngineError::illegal_state("start_session", self.phase));
        }
        if total_rounds == 0 {
            return Err(ConfigError::RoundCountZero.into());
        }
        if self.config.dice_sides == 0 {
            return Err(ConfigError::DiceSidesZero.into());
        }

        self.player = Some(Participant::human(player_name)?);
        self.computer.reset_score();
        self.total_rounds = total_rounds;
        self.current_round = 0;
        self.started_at = Some(env.clock.now());
        self.phase = SessionPhase::InProgress;
        Ok(())
    }

    /// Begin a session at one of the three selectable levels.
    pub fn start_level(
        &mut self,
        level: Level,
        player_name: &str,
        env: &mut GameEnv<'_>,
    ) -> Result<(), EngineError> {
        self.start_session(level.rounds(), player_name, env)
    }

    /// Play the next round: roll for both participants, re-rolling ties
    /// until the rolls differ, then apply scoring and count the round.
    ///
    /// # Errors
    ///
    /// `IllegalState` when the session is not in progress or every round has
    /// already been played.
    pub fn play_next_round(&mut self, env: &mut GameEnv<'_>) -> Result<RoundOutcome, EngineError> {
        if self.phase != SessionPhase::InProgress {
            return Err(EngineError::illegal_state("play_next_round", self.phase));
        }
        if self.current_round >= self.total_rounds {
            return Err(EngineError::illegal_state(
                "play_next_round after the final round",
                self.phase,
            ));
        }
        let player = match self.player.as_mut() {
            Some(player) => player,
            None => return Err(EngineError::illegal_state("play_next_round", self.phase)),
        };

        let mut rerolls = 0;
        loop {
            let player_roll = player.roll_die(env.dice, self.config.dice_sides);
            let computer_roll = self.computer.roll_die(env.dice, self.config.dice_sides);
            let outcome = round::resolve(player_roll, computer_roll);
            if outcome.tie {
                rerolls += 1;
                continue;
            }

            player.add_score(outcome.delta);
            if outcome.delta < 0 {
                self.computer.add_score(-outcome.delta);
            }
            self.current_round += 1;
            return Ok(RoundOutcome { rerolls, ..outcome });
        }
    }

    /// Abandon the session without producing a summary.
    ///
    /// # Errors
    ///
    /// `IllegalState` unless the session is in progress.
    pub fn request_early_exit(&mut self) -> Result<(), EngineError> {
        if self.phase != SessionPhase::InProgress {
            return Err(EngineError::illegal_state("request_early_exit", self.phase));
        }
        self.phase = SessionPhase::AbortedEarly;
        Ok(())
    }

    /// Close a naturally completed session and emit its summary.
    ///
    /// # Errors
    ///
    /// `IllegalState` unless every round has been played (in particular,
    /// aborted sessions can never be finalized).
    pub fn finalize_session(&mut self, env: &mut GameEnv<'_>) -> Result<Summary, EngineError> {
        if self.phase != SessionPhase::InProgress || self.current_round != self.total_rounds {
            return Err(EngineError::illegal_state("finalize_session", self.phase));
        }
        let (player, started_at) = match (self.player.as_ref(), self.started_at) {
            (Some(player), Some(started_at)) => (player, started_at),
            _ => return Err(EngineError::illegal_state("finalize_session", self.phase)),
        };

        let level = Level::from_rounds(self.total_rounds)
            .map(Level::label)
            .unwrap_or("Custom");

        self.phase = SessionPhase::Completed;
        Ok(Summary {
            started_at,
            finished_at: env.clock.now(),
            player: player.name().to_string(),
            level: level.to_string(),
            rounds: self.total_rounds,
            score: player.score(),
        })
    }

    // ===== accessors for the presentation layer =====

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// The human participant, present once the session has started.
    pub fn player(&self) -> Option<&Participant> {
        self.player.as_ref()
    }

    pub fn computer(&self) -> &Participant {
        &self.computer
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }
}
