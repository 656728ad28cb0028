use crate::hex::{pixel::project, Cell, Orientation, Point};
use serde::Serialize;

const FILES: &[u8; 15] = b"abcdefghijklmno";

#[rustfmt::skip]
const FILE_ANCHORS: [(i32, i32); 15] = [
    (-7, 2), (-6, 1), (-5, 0), (-4, -5), (-3, -5),
    (-2, -5), (-1, -5), (0, -5), (1, -6), (2, -7),
    (3, -8), (4, -5), (5, -5), (6, -5), (7, -5),
];

#[rustfmt::skip]
const RANK_ANCHORS: [(i32, i32); 15] = [
    (4, -7), (4, -6), (4, -5), (8, -4), (7, -3),
    (6, -2), (5, -1), (4, 0), (4, 1), (4, 2),
    (4, 3), (0, 4), (-1, 5), (-2, 6), (-3, 7),
];

/// Permutes axial coordinates as if they summed to zero.
///
/// Board notation and labels have always been computed with `s = -q - r`,
/// unlike the tiles themselves.
fn orient(q: i32, r: i32, o: Orientation) -> (i64, i64) {
    let (q, r) = (i64::from(q), i64::from(r));
    let (q, r, _) = o.permute((q, r, -q - r));
    (q, r)
}

impl Cell {
    /// The name of this cell as seen from a given [`Orientation`], e.g. `h9`.
    ///
    /// Cells that fall outside the 15x15 grid of names are written as `q,r`.
    pub fn notation(&self, o: Orientation) -> String {
        let (q, r) = orient(self.q(), self.r(), o);
        let file = usize::try_from(q + 7).ok().and_then(|i| FILES.get(i));
        let rank = 8 - r;

        match file {
            Some(&f) if (1..=15).contains(&rank) => format!("{}{rank}", f as char),
            _ => format!("{q},{r}"),
        }
    }
}

/// A text label placed next to the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

/// The file and rank labels around the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Labels {
    pub files: Vec<Label>,
    pub ranks: Vec<Label>,
}

impl Labels {
    /// Places the labels for tiles of a given `size` seen from an [`Orientation`].
    pub fn new(size: f64, o: Orientation) -> Self {
        let anchor = |(q, r): (i32, i32)| {
            let (q, r) = orient(q, r, o);
            project(q as f64, r as f64, size)
        };

        let files = FILE_ANCHORS
            .into_iter()
            .zip(FILES)
            .map(|(a, &f)| Label {
                text: (f as char).to_string(),
                position: anchor(a) + Point::new(0., -size * 0.3),
            })
            .collect();

        let ranks = RANK_ANCHORS
            .into_iter()
            .enumerate()
            .map(|(i, a)| Label {
                text: (i + 1).to_string(),
                position: anchor(a) + Point::new(-size * 0.2, size * 0.3),
            })
            .collect();

        Labels { files, ranks }
    }
}
