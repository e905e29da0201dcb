//! Oracle traits through which nondeterminism enters the engine.
//!
//! The engine itself is pure: dice rolls and timestamps are supplied by the
//! caller through [`GameEnv`]. Hosts pass a seeded [`PcgDice`] and
//! [`SystemClock`]; tests pass [`ScriptedDice`] and [`FixedClock`] to replay
//! exact sessions.

mod clock;
mod rng;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rng::{DiceOracle, PcgDice, ScriptedDice};

/// Bundle of oracles handed to every engine operation that needs them.
pub struct GameEnv<'a> {
    /// Source of die rolls for both participants.
    pub dice: &'a mut dyn DiceOracle,
    /// Source of session timestamps.
    pub clock: &'a dyn Clock,
}

impl<'a> GameEnv<'a> {
    pub fn new(dice: &'a mut dyn DiceOracle, clock: &'a dyn Clock) -> Self {
        Self { dice, clock }
    }
}
