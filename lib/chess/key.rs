use crate::chess::{Color, Role};
use crate::hex::Cell;
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// The canonical string identity of a piece at a given position.
///
/// Keys are written as `color|role|q|r`, with color and role in their integer
/// representation. Selection equality depends on this exact format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct PieceKey {
    pub color: Color,
    pub role: Role,
    pub cell: Cell,
}

impl PieceKey {
    const DELIMITER: char = '|';

    /// Constructs [`PieceKey`].
    pub fn new(color: Color, role: Role, cell: Cell) -> Self {
        PieceKey { color, role, cell }
    }

    /// Encodes a key directly from its fields.
    pub fn encode(color: Color, role: Role, q: i32, r: i32) -> String {
        let d = Self::DELIMITER;
        let (c, k) = (u8::from(color), u8::from(role));
        format!("{c}{d}{k}{d}{q}{d}{r}")
    }
}

impl fmt::Display for PieceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (q, r) = (self.cell.q(), self.cell.r());
        f.write_str(&PieceKey::encode(self.color, self.role, q, r))
    }
}

/// The reason why decoding [`PieceKey`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[error(ignore)]
pub enum DecodeError {
    #[display(fmt = "expected 4 fields but found {_0}")]
    FieldCount(usize),
    #[display(fmt = "`{_0}` is not an integer")]
    NotAnInteger(String),
    #[display(fmt = "{_0} is not a valid color")]
    InvalidColor(i32),
    #[display(fmt = "{_0} is not a valid piece")]
    InvalidRole(i32),
    #[display(fmt = "({_0}, {_1}) is not a representable cell")]
    OutOfRange(i32, i32),
}

impl FromStr for PieceKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(Self::DELIMITER).collect();

        let [c, r, q, rr] = fields[..] else {
            return Err(DecodeError::FieldCount(fields.len()));
        };

        let int = |f: &str| {
            f.parse::<i32>()
                .map_err(|_| DecodeError::NotAnInteger(f.into()))
        };

        let (c, r, q, rr) = (int(c)?, int(r)?, int(q)?, int(rr)?);

        let color = u8::try_from(c)
            .ok()
            .and_then(|c| Color::try_from(c).ok())
            .ok_or(DecodeError::InvalidColor(c))?;

        let role = u8::try_from(r)
            .ok()
            .and_then(|r| Role::try_from(r).ok())
            .ok_or(DecodeError::InvalidRole(r))?;

        let cell = Cell::try_new(q, rr).map_err(|_| DecodeError::OutOfRange(q, rr))?;

        Ok(PieceKey::new(color, role, cell))
    }
}
