//! Round resolution: compare two rolls and compute the score delta.

/// Result of comparing one pair of die rolls.
///
/// `delta` is signed from the player's perspective. A tie outcome
/// (`tie == true`, `delta == 0`) is never terminal: the engine re-rolls
/// until the rolls differ, so outcomes returned from
/// [`crate::SessionEngine::play_next_round`] always have `tie == false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    pub player_roll: u8,
    pub computer_roll: u8,
    /// Signed score change applied to the player: `player_roll - computer_roll`.
    pub delta: i32,
    pub tie: bool,
    /// Number of tie pairs re-rolled before this outcome resolved.
    pub rerolls: u32,
}

impl RoundOutcome {
    /// True when the player won this round.
    pub fn player_won(&self) -> bool {
        self.delta > 0
    }
}

/// Resolve one pair of rolls into an outcome.
pub fn resolve(player_roll: u8, computer_roll: u8) -> RoundOutcome {
    RoundOutcome {
        player_roll,
        computer_roll,
        delta: i32::from(player_roll) - i32::from(computer_roll),
        tie: player_roll == computer_roll,
        rerolls: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_sign_and_magnitude_over_full_grid() {
        for player in 1..=6u8 {
            for computer in 1..=6u8 {
                if player == computer {
                    continue;
                }
                let outcome = resolve(player, computer);
                assert!(!outcome.tie);
                assert_eq!(
                    outcome.delta.unsigned_abs(),
                    player.abs_diff(computer) as u32
                );
                assert_eq!(outcome.delta > 0, player > computer);
                assert_eq!(outcome.player_won(), player > computer);
            }
        }
    }

    #[test]
    fn equal_rolls_are_ties_with_zero_delta() {
        for face in 1..=6u8 {
            let outcome = resolve(face, face);
            assert!(outcome.tie);
            assert_eq!(outcome.delta, 0);
        }
    }
}
