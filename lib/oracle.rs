use crate::chess::{GameState, Move, Piece, Role};
use crate::hex::Cell;
use derive_more::{Display, Error};
use std::fmt::Display;

#[cfg(test)]
mod sandbox;

#[cfg(test)]
pub use sandbox::*;

/// The reason why the rules oracle refused an operation.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "the rules oracle rejected the operation: {_0}")]
pub struct Rejection(#[error(ignore)] String);

impl Rejection {
    /// Constructs [`Rejection`] from the oracle's reason.
    pub fn new(reason: impl Display) -> Self {
        Rejection(reason.to_string())
    }
}

/// The authoritative rules engine of a game.
///
/// The oracle is the sole authority on which moves are legal. Implementations are
/// expected to be deterministic and to answer immediately, and [`Default`] must
/// set up the standard starting position.
#[cfg_attr(test, mockall::automock)]
pub trait Oracle {
    /// The legal moves of the piece standing on a [`Cell`], if any.
    fn moves(&self, from: Cell) -> Vec<Move>;

    /// Plays a [`Move`], optionally promoting to a [`Role`] and passing the turn on.
    fn commit(&mut self, m: &Move, promotion: Option<Role>, advance: bool) -> Result<(), Rejection>;

    /// All pieces on the board.
    fn pieces(&self) -> Vec<Piece>;

    /// The current [`GameState`].
    fn state(&self) -> GameState;

    /// The current position in FEN.
    fn fen(&self) -> String;

    /// Replaces the current position by one in FEN.
    fn set_fen(&mut self, fen: &str) -> Result<(), Rejection>;
}

/// Sets up an [`Oracle`] at a position in FEN.
pub fn from_fen<O: Oracle + Default>(fen: &str) -> Result<O, Rejection> {
    let mut oracle = O::default();
    oracle.set_fen(fen)?;
    Ok(oracle)
}
