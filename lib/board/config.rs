use crate::board::{Mode, View};
use crate::hex::{Orientation, Viewport};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(test)]
use proptest::prelude::*;

/// Configuration for [`Board`][`crate::board::Board`].
#[derive(Debug, Display, Copy, Clone, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "config", default)]
pub struct Config {
    /// The height of the board in pixels.
    #[cfg_attr(test, strategy((100u16..2000).prop_map(f64::from)))]
    pub height: f64,

    /// The orientation of the board.
    ///
    /// Online boards default to the orientation of their seat.
    pub orientation: Option<Orientation>,

    /// Who may interact with the board.
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: 600.,
            orientation: None,
            mode: Mode::default(),
        }
    }
}

impl Config {
    /// The [`View`] this configuration describes.
    pub fn view(&self) -> View {
        let orientation = match (self.orientation, self.mode) {
            (Some(o), _) => o,
            (None, Mode::Online(seat)) => seat.into(),
            (None, _) => Orientation::default(),
        };

        View::new(Viewport::fit(self.height), orientation)
    }
}

/// The reason why parsing [`Config`] failed.
#[derive(Debug, Display, PartialEq, Error, From)]
#[display(fmt = "failed to parse board configuration")]
pub struct ParseConfigError(ron::error::SpannedError);

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
