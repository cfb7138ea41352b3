//! Grid geometry: [`Point`], the 8-way motion set and distance helpers.
//!
//! Coordinates are screen-style: X grows right, Y grows down. All planner
//! math works on cell centers, so integer points are enough here.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this is a diagonal unit offset (both components non-zero).
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.x != 0 && self.y != 0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Motion set
// ---------------------------------------------------------------------------

/// The eight unit offsets of the Moore neighborhood, cardinals first.
///
/// The planner scans directions in exactly this order, which pins down the
/// expansion order (and therefore tie-breaking) for identical inputs.
pub const MOTIONS_8: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Traversal cost of a single step along a unit offset: 1 for cardinal
/// moves, sqrt(2) for diagonal ones.
#[inline]
pub fn step_cost(dir: Point) -> f64 {
    if dir.is_diagonal() {
        std::f64::consts::SQRT_2
    } else {
        1.0
    }
}

/// Euclidean distance between two cell centers.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}
