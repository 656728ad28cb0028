use crate::chess::Color;
use crate::wire::{ParseWireError, WireMove};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A message exchanged with the game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum Event {
    /// A move played by some seat.
    Move(WireMove),
    /// The server's view of whose turn it is.
    #[serde(rename_all = "camelCase")]
    TurnUpdated {
        #[serde(with = "color_name")]
        current_turn: Color,
    },
    /// An opaque game status update.
    GameUpdated(serde_json::Value),
    /// A failure reported by the server.
    Error { message: String },
}

impl FromStr for Event {
    type Err = ParseWireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

mod color_name {
    use crate::chess::Color;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(c: &Color, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(c)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
        let name = String::deserialize(d)?;
        name.to_lowercase().parse().map_err(D::Error::custom)
    }
}
