use crate::chess::Color;
use serde::{Deserialize, Serialize};

/// Who may interact with the board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every seat plays on the same board.
    #[default]
    Local,
    /// Only the given seat plays on this board, the others play remotely.
    Online(Color),
    /// Nobody plays, the board only displays positions.
    Replay,
}

impl Mode {
    /// Whether the board accepts input while `turn` is to move.
    pub fn allows(&self, turn: Color) -> bool {
        match *self {
            Mode::Local => true,
            Mode::Online(seat) => seat == turn,
            Mode::Replay => false,
        }
    }
}
