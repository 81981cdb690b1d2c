//! Finite projective planes: the combinatorics behind the deck.
//!
//! ## Key Types
//!
//! - `Point`: canonical representative `(x, y, z)` modulo `n`
//! - `Line`: coefficient triple plus the points on it
//! - `ProjectivePlane`: every point and line of a plane of order `n`
//!
//! Each line becomes a card and each point a symbol, so two cards always
//! share exactly one symbol when the order is prime.

pub mod geometry;
pub mod point;
pub mod primality;

pub use geometry::{find_points_on_line, generate_lines, Line, PlaneDefect, ProjectivePlane};
pub use point::{convert_line_to_indices, generate_points, index_of, plane_size, Point};
pub use primality::is_prime;
