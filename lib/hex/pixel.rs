use crate::hex::Cell;
use derive_more::{Add, Constructor, Sub};
use serde::Serialize;
use std::f64::consts::PI;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in screen space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Add, Sub, Constructor, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Scales both coordinates.
    pub fn scale(&self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    /// Inverts [`Cell::pixel`], yielding fractional axial coordinates.
    ///
    /// The result is only approximate near tile boundaries, hit-testing should rely on
    /// click regions instead.
    pub fn axial(&self, size: f64) -> Axial {
        let x = self.x - size / 2.;
        let y = self.y + SQRT_3 * size / 2.;

        Axial {
            q: (2. / 3.) * x / size,
            r: ((-1. / 3.) * x - (SQRT_3 / 3.) * y) / size,
        }
    }
}

/// Fractional axial coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Axial {
    pub q: f64,
    pub r: f64,
}

/// Projects axial coordinates onto the screen.
pub(crate) fn project(q: f64, r: f64, size: f64) -> Point {
    Point {
        x: size * 1.5 * q + size / 2.,
        y: -size * (SQRT_3 / 2.) * q - size * SQRT_3 * r - SQRT_3 * size / 2.,
    }
}

impl Cell {
    /// Projects the center of this cell onto the screen.
    ///
    /// The third coordinate plays no part in the projection.
    pub fn pixel(&self, size: f64) -> Point {
        project(self.q().into(), self.r().into(), size)
    }

    /// The vertices of the hexagon drawn for this cell, starting at angle zero.
    pub fn polygon(&self, size: f64) -> [Point; 6] {
        let center = self.pixel(size);
        let mut vertices = [center; 6];

        for (i, v) in vertices.iter_mut().enumerate() {
            let angle = i as f64 * PI / 3.;
            *v = center + Point::new(size * angle.cos(), size * angle.sin());
        }

        vertices
    }
}
