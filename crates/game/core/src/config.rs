/// Game configuration constants and tunable parameters.
///
/// Collects what used to be scattered table data (die faces, name limits,
/// date formatting) into one struct handed to the engine at startup. No
/// process-wide mutable state is retained between sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of faces on the die both participants roll.
    pub dice_sides: u8,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Maximum player name length, counted in characters.
    pub const MAX_NAME_CHARS: usize = 20;
    /// Display name assigned to the computer opponent.
    pub const COMPUTER_NAME: &'static str = "Computer";
    /// Fixed timestamp format used in summaries and the history file.
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
    /// Unicode glyphs for die faces 1 through 6, for presentation layers.
    pub const DIE_FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DICE_SIDES: u8 = 6;

    pub fn new() -> Self {
        Self {
            dice_sides: Self::DEFAULT_DICE_SIDES,
        }
    }

    /// Glyph for a die face value, `None` outside the standard 1..=6 range.
    pub fn die_face(value: u8) -> Option<char> {
        match value {
            1..=6 => Some(Self::DIE_FACES[(value - 1) as usize]),
            _ => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
