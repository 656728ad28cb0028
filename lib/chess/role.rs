use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The kind of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Role {
    #[display(fmt = "pawn")]
    Pawn = 1,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "king")]
    King,
}

impl Role {
    /// All roles in ascending order of their integer representation.
    pub const ALL: [Self; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// The capitalized name of this role.
    pub fn name(self) -> &'static str {
        match self {
            Role::Pawn => "Pawn",
            Role::Knight => "Knight",
            Role::Bishop => "Bishop",
            Role::Rook => "Rook",
            Role::Queen => "Queen",
            Role::King => "King",
        }
    }
}

/// The reason why converting an integer into [`Role`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "{_0} is not a valid piece")]
pub struct InvalidRole(#[error(ignore)] pub u8);

impl TryFrom<u8> for Role {
    type Error = InvalidRole;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        let idx = i.checked_sub(1).ok_or(InvalidRole(i))?;
        Self::ALL.into_iter().nth(idx.into()).ok_or(InvalidRole(i))
    }
}

impl From<Role> for u8 {
    fn from(r: Role) -> Self {
        r as u8
    }
}
