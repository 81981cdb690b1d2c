//! Lines of a finite projective plane.
//!
//! Lines are written as `a·x + b·y + c·z ≡ 0 (mod n)`. The coefficient
//! triples `(a, b, c)` are themselves canonical representatives, so the
//! point enumeration doubles as the line enumeration.
//!
//! ## Guarantees
//!
//! For prime `n` the integers modulo `n` form a field and the result is a
//! projective plane: every line has `n + 1` points and any two lines share
//! exactly one point. Nothing here checks primality. A composite order
//! still produces output, it just isn't a plane; callers validate the order
//! first (see `GameConfig::validate`).
//!
//! ```
//! use cobble::plane::ProjectivePlane;
//!
//! let plane = ProjectivePlane::new(3);
//! assert_eq!(plane.lines().len(), 13);
//! assert!(plane.lines().iter().all(|l| l.len() == 4));
//! assert!(plane.verify().is_ok());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::point::{convert_line_to_indices, generate_points, plane_size, Point};

/// A line: its coefficient triple plus the points satisfying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Coefficients `(a, b, c)` of the line equation.
    pub coefficients: Point,
    /// Points on the line, in enumeration order.
    pub points: Vec<Point>,
}

impl Line {
    /// Number of points on the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no point satisfies the equation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if a point lies on the line.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }
}

/// Select, in enumeration order, the points satisfying one line equation.
#[must_use]
pub fn find_points_on_line(coefficients: Point, points: &[Point], order: u32) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| coefficients.dot_mod(p, order) == 0)
        .collect()
}

/// Generate every line of the plane of order `n`.
#[must_use]
pub fn generate_lines(order: u32) -> Vec<Line> {
    let points = generate_points(order);
    points
        .iter()
        .map(|&coefficients| Line {
            coefficients,
            points: find_points_on_line(coefficients, &points, order),
        })
        .collect()
}

/// Reason a generated design is not a projective plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaneDefect {
    /// A line does not have `n + 1` points.
    LineSize {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// Two lines do not meet in exactly one point.
    Intersection {
        first: usize,
        second: usize,
        shared: usize,
    },
}

impl std::fmt::Display for PlaneDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaneDefect::LineSize {
                line,
                expected,
                actual,
            } => write!(f, "line {line} has {actual} points, expected {expected}"),
            PlaneDefect::Intersection {
                first,
                second,
                shared,
            } => write!(f, "lines {first} and {second} share {shared} points"),
        }
    }
}

/// A generated plane: its points, lines and their index form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectivePlane {
    order: u32,
    points: Vec<Point>,
    lines: Vec<Line>,
}

impl ProjectivePlane {
    /// Generate the plane of the given order.
    #[must_use]
    pub fn new(order: u32) -> Self {
        Self {
            order,
            points: generate_points(order),
            lines: generate_lines(order),
        }
    }

    /// Plane order `n`.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of points, equal to the number of lines.
    #[must_use]
    pub fn point_count(&self) -> usize {
        plane_size(self.order)
    }

    /// Points in enumeration order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Lines in coefficient enumeration order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines with each point replaced by its enumeration index.
    #[must_use]
    pub fn index_lines(&self) -> Vec<Vec<usize>> {
        self.lines
            .iter()
            .map(|line| convert_line_to_indices(&line.points, self.order))
            .collect()
    }

    /// Check the plane axioms on the generated lines.
    ///
    /// Returns the first defect found. Quadratic in the number of lines.
    pub fn verify(&self) -> Result<(), PlaneDefect> {
        let expected = self.order as usize + 1;
        let index_lines = self.index_lines();

        for (line, indices) in index_lines.iter().enumerate() {
            if indices.len() != expected {
                return Err(PlaneDefect::LineSize {
                    line,
                    expected,
                    actual: indices.len(),
                });
            }
        }

        let sets: Vec<FxHashSet<usize>> = index_lines
            .iter()
            .map(|indices| indices.iter().copied().collect())
            .collect();

        for first in 0..sets.len() {
            for second in first + 1..sets.len() {
                let shared = sets[first].intersection(&sets[second]).count();
                if shared != 1 {
                    return Err(PlaneDefect::Intersection {
                        first,
                        second,
                        shared,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts_and_sizes() {
        for (order, count, size) in [(2, 7, 3), (3, 13, 4), (5, 31, 6)] {
            let lines = generate_lines(order);
            assert_eq!(lines.len(), count, "order {order}");
            assert!(lines.iter().all(|l| l.len() == size), "order {order}");
        }
    }

    #[test]
    fn test_fano_plane_first_line() {
        // (1, 0, 0) as coefficients: x ≡ 0
        let lines = generate_lines(2);
        assert_eq!(lines[0].coefficients, Point::new(1, 0, 0));
        assert_eq!(
            lines[0].points,
            vec![Point::new(0, 1, 0), Point::new(0, 0, 1), Point::new(0, 1, 1)]
        );
    }

    #[test]
    fn test_points_satisfy_equation() {
        let order = 5;
        for line in generate_lines(order) {
            for p in &line.points {
                assert_eq!(line.coefficients.dot_mod(*p, order), 0);
            }
        }
    }

    #[test]
    fn test_prime_planes_verify() {
        for order in [2, 3, 5, 7, 11] {
            assert_eq!(ProjectivePlane::new(order).verify(), Ok(()), "order {order}");
        }
    }

    #[test]
    fn test_composite_order_is_not_a_plane() {
        let plane = ProjectivePlane::new(4);
        assert!(plane.verify().is_err());

        let plane = ProjectivePlane::new(6);
        assert!(plane.verify().is_err());
    }

    #[test]
    fn test_degenerate_orders_still_run() {
        let plane = ProjectivePlane::new(0);
        assert_eq!(plane.points().len(), 1);
        assert!(plane.lines()[0].is_empty());

        let plane = ProjectivePlane::new(1);
        assert_eq!(plane.lines().len(), 3);
        // Everything is zero modulo 1
        assert!(plane.lines().iter().all(|l| l.len() == 3));
        assert!(plane.verify().is_err());
    }

    #[test]
    fn test_index_lines_in_range() {
        let plane = ProjectivePlane::new(3);
        let size = plane.point_count();
        for line in plane.index_lines() {
            assert!(line.iter().all(|&i| i < size));
            assert!(line.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_every_point_pair_on_one_line() {
        let plane = ProjectivePlane::new(3);
        let points = plane.points();
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                let through = plane
                    .lines()
                    .iter()
                    .filter(|l| l.contains(points[i]) && l.contains(points[j]))
                    .count();
                assert_eq!(through, 1);
            }
        }
    }

    #[test]
    fn test_defect_display() {
        let defect = PlaneDefect::Intersection {
            first: 1,
            second: 4,
            shared: 2,
        };
        assert_eq!(defect.to_string(), "lines 1 and 4 share 2 points");
    }
}
