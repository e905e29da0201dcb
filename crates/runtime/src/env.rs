//! Host environment: entropy-seeded dice for live sessions.
//!
//! The core dice are deterministic by design; only the host decides when a
//! session should be genuinely unpredictable, by drawing the seed from OS
//! entropy here.

use bones_core::PcgDice;

/// A dice oracle seeded from OS entropy, for live play.
pub fn entropy_dice() -> PcgDice {
    PcgDice::seeded(rand::random::<u64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bones_core::DiceOracle;

    #[test]
    fn entropy_dice_roll_in_range() {
        let mut dice = entropy_dice();
        for _ in 0..100 {
            let roll = dice.roll(6);
            assert!((1..=6).contains(&roll));
        }
    }
}
