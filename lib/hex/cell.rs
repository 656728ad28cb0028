use crate::hex::Orientation;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile of the board in cube-like coordinates.
///
/// Every cell satisfies `q + r + s = -1`, which is the convention the rules engine uses to
/// address the centers of the board's tiles. The third coordinate is therefore always derived
/// from the other two and `(q, r)` alone identifies a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cube", into = "Cube")]
pub struct Cell {
    q: i32,
    r: i32,
    s: i32,
}

impl Cell {
    /// The sum of the three coordinates of every cell.
    pub const SUM: i32 = -1;

    /// Constructs [`Cell`] from its axial coordinates.
    ///
    /// Coordinates from untrusted sources should go through [`Cell::try_new`] instead,
    /// since the third coordinate may not be representable.
    #[inline(always)]
    pub const fn new(q: i32, r: i32) -> Self {
        Cell {
            q,
            r,
            s: Self::SUM - q - r,
        }
    }

    /// Constructs [`Cell`] from its axial coordinates, if the third coordinate fits in an `i32`.
    pub fn try_new(q: i32, r: i32) -> Result<Self, OutOfRange> {
        match Self::SUM.checked_sub(q).and_then(|s| s.checked_sub(r)) {
            Some(s) => Ok(Cell { q, r, s }),
            None => Err(OutOfRange { q, r }),
        }
    }

    /// Constructs [`Cell`] from all three coordinates, if they satisfy the invariant.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Result<Self, InvalidCell> {
        match q.checked_add(r).and_then(|qr| qr.checked_add(s)) {
            Some(Self::SUM) => Ok(Cell { q, r, s }),
            _ => Err(InvalidCell { q, r, s }),
        }
    }

    /// The first coordinate.
    #[inline(always)]
    pub const fn q(&self) -> i32 {
        self.q
    }

    /// The second coordinate.
    #[inline(always)]
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// The third coordinate.
    #[inline(always)]
    pub const fn s(&self) -> i32 {
        self.s
    }

    /// Translates this cell by an axial displacement, unless it would leave the
    /// representable range.
    #[inline(always)]
    pub fn step(&self, dq: i32, dr: i32) -> Option<Self> {
        let q = self.q.checked_add(dq)?;
        let r = self.r.checked_add(dr)?;
        Cell::try_new(q, r).ok()
    }

    /// Permutes this cell's coordinates according to an [`Orientation`].
    #[inline(always)]
    pub fn rotate(&self, o: Orientation) -> Self {
        let (q, r, s) = o.permute((self.q, self.r, self.s));
        Cell { q, r, s }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// The reason why a triple of coordinates is not a [`Cell`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "({q}, {r}, {s}) does not satisfy q + r + s = -1")]
pub struct InvalidCell {
    q: i32,
    r: i32,
    s: i32,
}

/// The reason why a pair of axial coordinates is not a [`Cell`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "({q}, {r}) is out of range")]
pub struct OutOfRange {
    q: i32,
    r: i32,
}

#[derive(Serialize, Deserialize)]
struct Cube {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<Cube> for Cell {
    type Error = InvalidCell;

    fn try_from(Cube { q, r, s }: Cube) -> Result<Self, Self::Error> {
        Cell::from_cube(q, r, s)
    }
}

impl From<Cell> for Cube {
    fn from(c: Cell) -> Self {
        Cube {
            q: c.q,
            r: c.r,
            s: c.s,
        }
    }
}

// A custom implementation of Arbitrary keeps the invariant intact
// and the coordinates far from overflowing.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Cell {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Cell>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        (-1000i32..=1000, -1000i32..=1000)
            .prop_map(|(q, r)| Cell::new(q, r))
            .boxed()
    }
}
