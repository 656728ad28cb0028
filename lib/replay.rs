use crate::chess::{GameState, Piece};
use crate::oracle::{self, Oracle, Rejection};
use crate::reconcile::{reconcile, ReconcileError};
use crate::wire::WireMove;
use tracing::{error, instrument, warn};

/// A recorded game that can be navigated move by move.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Replay {
    start: Option<String>,
    moves: Vec<WireMove>,
}

/// Where and why a replay stopped short of its target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Halt {
    /// The index of the move that could not be applied.
    pub index: usize,
    pub error: ReconcileError,
}

/// The position reached by seeking a [`Replay`].
#[derive(Debug)]
pub struct Snapshot<O> {
    oracle: O,
    applied: usize,
    halt: Option<Halt>,
}

impl<O: Oracle> Snapshot<O> {
    /// All pieces on the board.
    pub fn pieces(&self) -> Vec<Piece> {
        self.oracle.pieces()
    }

    /// The state of the game.
    pub fn state(&self) -> GameState {
        self.oracle.state()
    }

    /// The number of moves applied.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// The move that could not be applied, if any.
    pub fn halt(&self) -> Option<Halt> {
        self.halt
    }

    /// The oracle at the position reached.
    pub fn into_oracle(self) -> O {
        self.oracle
    }
}

impl Replay {
    /// A replay of `moves` from the starting position.
    pub fn new(moves: Vec<WireMove>) -> Self {
        Replay { start: None, moves }
    }

    /// A replay of `moves` from a position in FEN.
    pub fn from_fen(fen: &str, moves: Vec<WireMove>) -> Self {
        Replay {
            start: Some(fen.into()),
            moves,
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[WireMove] {
        &self.moves
    }

    /// Reconstructs the position right after the move at `index`.
    ///
    /// The position is recomputed from scratch on every call by reconciling and committing
    /// every move up to and including `index`, which takes `O(index)` reconciliations.
    /// Indices beyond the last move yield the final position. Reconstruction stops at the
    /// first move that fails to reconcile, keeping the last position reached.
    #[instrument(level = "trace", skip(self), err)]
    pub fn seek<O: Oracle + Default>(&self, index: usize) -> Result<Snapshot<O>, Rejection> {
        let oracle = match &self.start {
            None => O::default(),
            Some(fen) => oracle::from_fen(fen)?,
        };

        self.apply(oracle, index)
    }

    /// Plays the moves up to and including `index` on an oracle set up at the starting
    /// position of this replay.
    ///
    /// A rejection by the oracle of a move it has just certified ends the replay.
    pub fn apply<O: Oracle>(&self, mut oracle: O, index: usize) -> Result<Snapshot<O>, Rejection> {
        let mut applied = 0;
        for (i, wire) in self.moves.iter().take(index.saturating_add(1)).enumerate() {
            let m = match reconcile(&oracle, wire) {
                Ok(m) => m,
                Err(error) => {
                    warn!(i, %wire, %error, "replay halted");
                    let halt = Some(Halt { index: i, error });
                    return Ok(Snapshot { oracle, applied, halt });
                }
            };

            if let Err(e) = oracle.commit(&m, None, true) {
                error!(i, %m, %e, "oracle rejected a certified move");
                return Err(e);
            }

            applied += 1;
        }

        Ok(Snapshot {
            oracle,
            applied,
            halt: None,
        })
    }
}
