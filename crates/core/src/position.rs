//! Points in the unbounded navigation plane.
//!
//! [`Position`] is a plain value: two `f64` coordinates with no identity
//! beyond them. Every entity in a world (agent, goal, obstacles) lives in the
//! same coordinate space; clipping to a finite canvas is left to renderers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point in the 2D plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Position) -> f64 {
        distance(self, other)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Position) -> f64 {
        distance_squared(self, other)
    }
}

/// Euclidean distance between `a` and `b`. Never negative; `distance(a, a) == 0`.
pub fn distance(a: Position, b: Position) -> f64 {
    distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance between `a` and `b`.
///
/// Used inside the Gaussian exponent of field sources where the square root
/// would only be squared again.
pub fn distance_squared(a: Position, b: Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
