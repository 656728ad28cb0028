use crate::chess::Move;
use crate::oracle::Oracle;
use crate::wire::{Coordinates, WireMove};
use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};

/// The reason why a [`WireMove`] could not be matched to a legal [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error(ignore)]
pub enum ReconcileError {
    #[display(fmt = "no piece stands on {_0}")]
    NotFound(Coordinates),
    #[display(fmt = "`{_0}` does not match any legal move")]
    Mismatch(WireMove),
}

/// Finds the legal [`Move`] a [`WireMove`] describes.
///
/// The piece is located by its axial coordinates and the oracle is asked for its legal
/// moves, the first one that agrees on destination, type, color and piece wins.
/// Nothing is ever committed on behalf of a move the oracle does not certify, and
/// coordinates that name no cell simply match no piece.
#[instrument(level = "trace", skip(oracle), err)]
pub fn reconcile<O: Oracle + ?Sized>(oracle: &O, wire: &WireMove) -> Result<Move, ReconcileError> {
    let from = wire.from;

    let Some(piece) = oracle
        .pieces()
        .into_iter()
        .find(|p| Coordinates::from(p.cell) == from)
    else {
        warn!(%from, "no piece found at origin");
        return Err(ReconcileError::NotFound(from));
    };

    match oracle.moves(piece.cell).into_iter().find(|m| wire.matches(m)) {
        Some(m) => {
            debug!(%m, "reconciled");
            Ok(m)
        }

        None => {
            warn!(%wire, %piece, "no matching legal move");
            Err(ReconcileError::Mismatch(*wire))
        }
    }
}
