//! Costmap interpretation parameters.

/// Controls how raw cell costs are interpreted by [`Costmap`].
///
/// A cell is impassable when `cost >= lethal_cost * obstacle_factor`. The
/// defaults match the common occupancy-grid convention where 253 marks the
/// start of the lethal band and half of it is already considered too close
/// to an obstacle.
///
/// [`Costmap`]: crate::Costmap
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostmapConfig {
    /// Cost value at which a cell is definitely lethal.
    pub lethal_cost: u8,
    /// Fraction of `lethal_cost` at which a cell already counts as blocked.
    pub obstacle_factor: f64,
}

impl CostmapConfig {
    /// The blocking threshold: `lethal_cost * obstacle_factor`.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        f64::from(self.lethal_cost) * self.obstacle_factor
    }
}

impl Default for CostmapConfig {
    fn default() -> Self {
        Self {
            lethal_cost: 253,
            obstacle_factor: 0.5,
        }
    }
}
