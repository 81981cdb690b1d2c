//! Canonical points of a finite projective plane and their indices.
//!
//! A point is a triple `(x, y, z)` over the integers modulo `n`, standing for
//! the class of all its non-zero scalar multiples. The representative is the
//! one with a `1` in the last non-zero coordinate, which gives:
//!
//! - `(1, 0, 0)`: 1 point
//! - `(x, 1, 0)` for `x in 0..n`: n points
//! - `(x, y, 1)` for `x, y in 0..n`: n² points
//!
//! The enumeration order produced by [`generate_points`] is the indexing
//! contract for the rest of the crate: [`index_of`] maps every point back to
//! its position in that sequence.

use serde::{Deserialize, Serialize};

/// Representative of a point (or of a line's coefficient triple).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another triple, reduced modulo `order`.
    ///
    /// Order 0 has no modulus; the raw sum is returned.
    #[must_use]
    pub fn dot_mod(self, other: Point, order: u32) -> u64 {
        let sum = u64::from(self.x) * u64::from(other.x)
            + u64::from(self.y) * u64::from(other.y)
            + u64::from(self.z) * u64::from(other.z);
        sum.checked_rem(u64::from(order)).unwrap_or(sum)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Number of points (and lines) in a plane of the given order: `n² + n + 1`.
#[must_use]
pub const fn plane_size(order: u32) -> usize {
    let n = order as usize;
    n * n + n + 1
}

/// Enumerate the canonical points of a plane of order `n`.
///
/// Yields `(1, 0, 0)`, then `(x, 1, 0)` for each `x`, then `(x, y, 1)` with
/// `y` varying fastest.
#[must_use]
pub fn generate_points(order: u32) -> Vec<Point> {
    let mut points = Vec::with_capacity(plane_size(order));
    points.push(Point::new(1, 0, 0));
    points.extend((0..order).map(|x| Point::new(x, 1, 0)));
    for x in 0..order {
        points.extend((0..order).map(|y| Point::new(x, y, 1)));
    }
    points
}

/// Position of a canonical point in the [`generate_points`] enumeration.
///
/// The result is only meaningful for canonical representatives.
#[must_use]
pub fn index_of(point: Point, order: u32) -> usize {
    let n = order as usize;
    match point {
        Point { y: 0, z: 0, .. } => 0,
        Point { x, z: 0, .. } => x as usize + 1,
        Point { x, y, .. } => x as usize * n + y as usize + n + 1,
    }
}

/// Translate a line given as points into the indices of those points.
#[must_use]
pub fn convert_line_to_indices(line: &[Point], order: u32) -> Vec<usize> {
    line.iter().map(|&p| index_of(p, order)).collect()
}
