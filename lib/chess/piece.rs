use crate::chess::{Color, PieceKey, Role};
use crate::hex::Cell;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A piece of a certain [`Color`] and [`Role`] standing on a [`Cell`].
///
/// Pieces carry no identity besides these three attributes.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{color} {role} at {cell}")]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub cell: Cell,
}

impl Piece {
    /// Constructs [`Piece`].
    pub fn new(color: Color, role: Role, cell: Cell) -> Self {
        Piece { color, role, cell }
    }

    /// This piece's canonical key.
    pub fn key(&self) -> PieceKey {
        PieceKey::new(self.color, self.role, self.cell)
    }
}
