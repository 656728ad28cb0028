use crate::hex::Cell;

/// The 96 tiles of the three-player board.
///
/// The board is the union of two overlapping triangles of cells.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Layout;

impl Layout {
    /// The number of tiles on the board.
    pub const LEN: usize = 96;

    /// Whether a cell lies on the board.
    pub fn contains(&self, c: Cell) -> bool {
        let (q, r) = (c.q(), c.r());
        ((-4..=7).contains(&q) && r >= -4 && r < 4 - q)
            || ((-7..=3).contains(&q) && r >= -4 - q && r < 4)
    }

    /// Iterates over all tiles on the board, ordered by `q` then `r`.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (-7..=7)
            .flat_map(|q| (-7..=7).map(move |r| Cell::new(q, r)))
            .filter(move |&c| self.contains(c))
    }
}
