use crate::chess::{Color, Move, MoveType, Role};
use crate::hex::{Cell, OutOfRange};
use crate::wire::ParseWireError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The axial coordinates of a cell as they travel over the network.
///
/// Additional fields, such as the third coordinate, are ignored.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({q}, {r})")]
pub struct Coordinates {
    #[cfg_attr(test, strategy(-9i32..9))]
    pub q: i32,
    #[cfg_attr(test, strategy(-9i32..9))]
    pub r: i32,
}

impl From<Cell> for Coordinates {
    fn from(c: Cell) -> Self {
        Coordinates { q: c.q(), r: c.r() }
    }
}

impl TryFrom<Coordinates> for Cell {
    type Error = OutOfRange;

    fn try_from(c: Coordinates) -> Result<Self, Self::Error> {
        Cell::try_new(c.q, c.r)
    }
}

/// The lossy description of a [`Move`] sent to peers and kept in game histories.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{color} {piece} {from} -> {to} ({move_type})")]
pub struct WireMove {
    pub from: Coordinates,
    pub to: Coordinates,
    pub move_type: MoveType,
    pub color: Color,
    pub piece: Role,
}

impl WireMove {
    /// Whether a [`Move`] has the same destination, type, color and piece.
    ///
    /// The origin is not compared, moves are only ever matched against those
    /// the oracle generates for this move's origin.
    pub fn matches(&self, m: &Move) -> bool {
        self.to == Coordinates::from(m.to)
            && self.move_type == m.kind
            && self.color == m.color
            && self.piece == m.role
    }

    /// A short description such as `White Pawn DoublePawnPush`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {}",
            self.color.name(),
            self.piece.name(),
            self.move_type
        )
    }
}

impl From<&Move> for WireMove {
    fn from(m: &Move) -> Self {
        WireMove {
            from: m.from.into(),
            to: m.to.into(),
            move_type: m.kind,
            color: m.color,
            piece: m.role,
        }
    }
}

impl FromStr for WireMove {
    type Err = ParseWireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
