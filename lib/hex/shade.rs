use crate::hex::Cell;
use derive_more::Display;
use serde::Serialize;

/// One of the three tile shades that color the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Shade {
    #[display(fmt = "#E0E0E0")]
    Light,
    #[display(fmt = "#A0A0A0")]
    Medium,
    #[display(fmt = "#606060")]
    Dark,
}

impl Cell {
    /// The shade of this cell's tile.
    ///
    /// Adjacent tiles never share a shade.
    pub fn shade(&self) -> Shade {
        match (2 * i64::from(self.q()) + i64::from(self.r())).rem_euclid(3) {
            0 => Shade::Light,
            1 => Shade::Medium,
            _ => Shade::Dark,
        }
    }
}
