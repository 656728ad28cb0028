use crate::chess::{Move, Piece};
use crate::hex::{Cell, Labels, Layout, Orientation, Point, Shade, Viewport};
use serde::Serialize;

/// A circular area of the screen that responds to clicks.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Region {
    pub center: Point,
    pub radius: f64,
}

impl Region {
    /// Whether a point falls within this region, boundary included.
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// A hexagonal tile of the board.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub cell: Cell,
    pub shade: Shade,
    pub polygon: [Point; 6],
}

/// A piece as drawn on the board.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub piece: Piece,
    pub region: Region,
}

/// A highlighted destination of the selected piece.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub r#move: Move,
    /// The radius of the dot drawn on the destination.
    pub radius: f64,
    pub region: Region,
}

/// Projects the board onto the screen.
///
/// Tiles are always drawn in place, only pieces and markers turn with the orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    viewport: Viewport,
    orientation: Orientation,
}

impl View {
    const REACH: f64 = 0.6;

    /// Constructs [`View`].
    pub fn new(viewport: Viewport, orientation: Orientation) -> Self {
        View {
            viewport,
            orientation,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, o: Orientation) {
        self.orientation = o;
    }

    fn region(&self, c: Cell) -> Region {
        let size = self.viewport.size;

        Region {
            center: c.rotate(self.orientation).pixel(size),
            radius: size * Self::REACH,
        }
    }

    /// The 96 tiles of the board.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Layout.cells().map(|cell| Tile {
            cell,
            shade: cell.shade(),
            polygon: cell.polygon(self.viewport.size),
        })
    }

    /// Places a [`Piece`] on the screen.
    pub fn sprite(&self, piece: Piece) -> Sprite {
        Sprite {
            piece,
            region: self.region(piece.cell),
        }
    }

    /// Places a marker on the destination of a [`Move`].
    pub fn marker(&self, m: Move) -> Marker {
        let k = if m.kind.captures_on_target() { 0.5 } else { 0.15 };

        Marker {
            r#move: m,
            radius: self.viewport.size * k,
            region: self.region(m.to),
        }
    }

    /// The file and rank labels around the board.
    pub fn labels(&self) -> Labels {
        Labels::new(self.viewport.size, self.orientation)
    }
}
