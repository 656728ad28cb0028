use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The color of a player and their pieces.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "grey")]
    Grey,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Self; 3] = [Color::White, Color::Grey, Color::Black];

    /// The color that plays after this one.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % 3]
    }

    /// The capitalized name of this color, as shown in move histories.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Grey => "Gray",
            Color::Black => "Black",
        }
    }
}

/// The reason why converting an integer into [`Color`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "{_0} is not a valid color")]
pub struct InvalidColor(#[error(ignore)] pub u8);

impl TryFrom<u8> for Color {
    type Error = InvalidColor;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().nth(i.into()).ok_or(InvalidColor(i))
    }
}

impl From<Color> for u8 {
    fn from(c: Color) -> Self {
        c as u8
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "grey" | "gray" => Ok(Color::Grey),
            "black" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}
