use crate::chess::{Color, MoveType, Piece, Role};
use crate::hex::Cell;
use derive_more::Display;

/// A move as certified by the rules oracle.
///
/// Besides what travels over the network, a move may carry details only the oracle
/// knows about, such as the piece it captures.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{color} {role} {from} -> {to} ({kind})")]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    pub kind: MoveType,
    pub color: Color,
    pub role: Role,
    pub capture: Option<Piece>,
}

impl Move {
    /// The [`Piece`] making this move, as it stands before the move.
    pub fn piece(&self) -> Piece {
        Piece::new(self.color, self.role, self.from)
    }
}
