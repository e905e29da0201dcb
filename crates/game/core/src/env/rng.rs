//! Dice oracle for deterministic die rolls.
//!
//! All implementations must be deterministic: given the same seed (or the
//! same scripted sequence), they must produce the same rolls. This keeps
//! sessions replayable and lets tests drive the tie re-roll loop without
//! real randomness.

use std::collections::VecDeque;

/// Source of die rolls.
pub trait DiceOracle {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u8) -> u8;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit state advanced by an LCG step, with a
/// xorshift-and-rotate output permutation producing 32-bit values. Small
/// state, fast, and deterministic for a given seed.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    ///
    /// The seed is stepped once on construction so that nearby seeds do not
    /// share their first outputs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output function: xorshift high bits, then random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.state = Self::step(state);
        Self::output(state)
    }
}

impl DiceOracle for PcgDice {
    fn roll(&mut self, sides: u8) -> u8 {
        // A die has at least one face; treat 0 as 1 rather than divide by it.
        let sides = u32::from(sides.max(1));
        (self.next_u32() % sides) as u8 + 1
    }
}

/// Dice oracle replaying a fixed sequence of rolls.
///
/// Intended for tests and replays. Panics when the sequence runs dry, which
/// in a test marks the roll script as too short for the session under test.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceOracle for ScriptedDice {
    fn roll(&mut self, _sides: u8) -> u8 {
        self.rolls
            .pop_front()
            .expect("scripted dice sequence exhausted")
    }
}
