//! Read-only costmap view over a row-major cost array.

use crate::config::CostmapConfig;
use crate::error::CostmapError;
use crate::geom::Point;

/// Well-known cost values, following the usual occupancy-grid convention.
pub mod cost {
    /// Fully traversable cell.
    pub const FREE: u8 = 0;
    /// Elevated cost, still traversable under the default cutoff.
    pub const NEAR_OBSTACLE: u8 = 120;
    /// Inside the inflation band, blocked under the default cutoff.
    pub const INFLATED: u8 = 200;
    /// Hard obstacle.
    pub const LETHAL: u8 = 254;
}

/// A borrowed, row-major grid of cell costs.
///
/// The view does not own the cost data; it pairs a `&[u8]` slice with grid
/// dimensions and a precomputed blocking cutoff. Cell `(x, y)` lives at
/// linear index `y * width + x`. Out-of-bounds lookups never panic: they
/// report no cost and count as blocked.
#[derive(Copy, Clone, Debug)]
pub struct Costmap<'a> {
    costs: &'a [u8],
    width: usize,
    height: usize,
    cutoff: f64,
}

impl<'a> Costmap<'a> {
    /// Create a view over `costs`, validating that it holds exactly
    /// `width * height` cells.
    pub fn new(
        costs: &'a [u8],
        width: usize,
        height: usize,
        config: &CostmapConfig,
    ) -> Result<Self, CostmapError> {
        if width == 0 || height == 0 {
            return Err(CostmapError::ZeroDimension);
        }
        let expected = width * height;
        if costs.len() != expected {
            return Err(CostmapError::SizeMismatch {
                width,
                height,
                len: costs.len(),
                expected,
            });
        }
        Ok(Self::from_parts(costs, width, height, config.cutoff()))
    }

    /// Build a view from already-validated parts.
    pub(crate) fn from_parts(costs: &'a [u8], width: usize, height: usize, cutoff: f64) -> Self {
        Self {
            costs,
            width,
            height,
            cutoff,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Always false: zero-sized views are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// The blocking threshold this view was built with.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Linear index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Raw cost of `p`, or `None` when out of bounds.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<u8> {
        self.index(p).map(|i| self.costs[i])
    }

    /// Whether `p` cannot be traversed.
    ///
    /// A cell blocks when its cost reaches the cutoff. Out-of-bounds cells
    /// are conservatively blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        match self.cost(p) {
            Some(c) => f64::from(c) >= self.cutoff,
            None => true,
        }
    }
}
