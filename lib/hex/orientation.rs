use crate::chess::Color;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The rotation of the board for the player sitting at the bottom.
///
/// Orientations form a cyclic group of order three under [`Orientation::then`],
/// with [`Orientation::Primary`] as the identity.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Orientation {
    /// `(q, r, s) -> (q, r, s)`
    #[default]
    #[display(fmt = "primary")]
    Primary,
    /// `(q, r, s) -> (s, q, r)`
    #[display(fmt = "secondary")]
    Secondary,
    /// `(q, r, s) -> (r, s, q)`
    #[display(fmt = "tertiary")]
    Tertiary,
}

impl Orientation {
    /// All orientations in cyclic order.
    pub const ALL: [Self; 3] = [
        Orientation::Primary,
        Orientation::Secondary,
        Orientation::Tertiary,
    ];

    /// Permutes a triple of coordinates.
    #[inline(always)]
    pub fn permute<T>(&self, (q, r, s): (T, T, T)) -> (T, T, T) {
        match self {
            Orientation::Primary => (q, r, s),
            Orientation::Secondary => (s, q, r),
            Orientation::Tertiary => (r, s, q),
        }
    }

    /// The orientation equivalent to applying `self` followed by `other`.
    #[inline(always)]
    pub fn then(self, other: Self) -> Self {
        Self::ALL[(self as usize + other as usize) % 3]
    }

    /// The orientation that undoes `self`.
    #[inline(always)]
    pub fn inverse(self) -> Self {
        Self::ALL[(3 - self as usize) % 3]
    }
}

impl From<Color> for Orientation {
    /// The orientation that puts the pieces of a given [`Color`] at the bottom.
    fn from(c: Color) -> Self {
        match c {
            Color::White => Orientation::Primary,
            Color::Black => Orientation::Secondary,
            Color::Grey => Orientation::Tertiary,
        }
    }
}

/// The reason why parsing [`Orientation`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse orientation")]
pub struct ParseOrientationError;

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Orientation::Primary),
            "secondary" => Ok(Orientation::Secondary),
            "tertiary" => Ok(Orientation::Tertiary),
            s => s
                .parse::<Color>()
                .map(Orientation::from)
                .map_err(|_| ParseOrientationError),
        }
    }
}
