use crate::hex::{Cell, Point};
use serde::Serialize;

/// The screen area that fits the whole board at a given height.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Viewport {
    /// The circumradius of each tile.
    pub size: f64,
    /// The top-left corner of the view box.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Fits the board in `height` pixels, leaving a 40 pixel margin.
    pub fn fit(height: f64) -> Self {
        let size = (height - 40.) / 12. / 3f64.sqrt();

        let min_x = Cell::new(-7, 3).pixel(size).x - size;
        let max_x = Cell::new(7, -4).pixel(size).x + size;
        let min_y = Cell::new(-4, 7).pixel(size).y - size;
        let max_y = Cell::new(-4, -4).pixel(size).y + size;

        Viewport {
            size,
            origin: Point::new(min_x - size, min_y - size),
            width: max_x - min_x + size * 2.,
            height: max_y - min_y + size * 2.,
        }
    }
}
