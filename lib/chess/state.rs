use crate::chess::Color;
use serde::{Deserialize, Serialize};

/// A summary of the game as reported by the rules oracle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct GameState {
    /// The color to move.
    pub turn: Color,
    /// The winner, once the game has been won.
    #[serde(rename = "won")]
    pub winner: Option<Color>,
    pub is_stalemate: bool,
    /// The number of moves committed so far.
    pub move_count: u32,
}

impl GameState {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            turn: Color::White,
            winner: None,
            is_stalemate: false,
            move_count: 0,
        }
    }
}
