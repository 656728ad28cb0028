use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The kind of a [`Move`][`crate::chess::Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum MoveType {
    #[display(fmt = "Move")]
    Move,
    #[display(fmt = "DoublePawnPush")]
    DoublePawnPush,
    #[display(fmt = "Capture")]
    Capture,
    #[display(fmt = "EnPassant")]
    EnPassant,
    #[display(fmt = "EnPassantPromotion")]
    EnPassantPromotion,
    #[display(fmt = "Promotion")]
    Promotion,
    #[display(fmt = "CapturePromotion")]
    CapturePromotion,
    #[display(fmt = "CastleKingSide")]
    CastleKingSide,
    #[display(fmt = "CastleQueenSide")]
    CastleQueenSide,
}

impl MoveType {
    /// All move types in ascending order of their integer representation.
    pub const ALL: [Self; 9] = [
        MoveType::Move,
        MoveType::DoublePawnPush,
        MoveType::Capture,
        MoveType::EnPassant,
        MoveType::EnPassantPromotion,
        MoveType::Promotion,
        MoveType::CapturePromotion,
        MoveType::CastleKingSide,
        MoveType::CastleQueenSide,
    ];

    /// Whether this move captures the piece standing on its destination.
    ///
    /// En passant captures a piece elsewhere and is not included.
    pub fn captures_on_target(&self) -> bool {
        matches!(self, MoveType::Capture | MoveType::CapturePromotion)
    }
}

/// The reason why converting an integer into [`MoveType`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "{_0} is not a valid move type")]
pub struct InvalidMoveType(#[error(ignore)] pub u8);

impl TryFrom<u8> for MoveType {
    type Error = InvalidMoveType;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().nth(i.into()).ok_or(InvalidMoveType(i))
    }
}

impl From<MoveType> for u8 {
    fn from(t: MoveType) -> Self {
        t as u8
    }
}
