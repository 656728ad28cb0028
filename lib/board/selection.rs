use crate::chess::{Color, Piece};

/// The piece, if any, whose legal moves are highlighted.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Selection {
    #[default]
    Idle,
    Selected(Piece),
}

impl Selection {
    /// The selected piece.
    pub fn piece(&self) -> Option<Piece> {
        match *self {
            Selection::Idle => None,
            Selection::Selected(p) => Some(p),
        }
    }

    /// The selection after a [`Piece`] is clicked while `turn` is to move.
    ///
    /// Clicking the selected piece again clears the selection, pieces of other colors are
    /// ignored. Pieces are compared by their key.
    pub fn click(self, p: Piece, turn: Color) -> Self {
        match self {
            s if p.color != turn => s,
            Selection::Selected(s) if s.key() == p.key() => Selection::Idle,
            _ => Selection::Selected(p),
        }
    }
}
