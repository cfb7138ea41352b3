//! Planner error type.

use gridnav_core::Point;
use thiserror::Error;

/// Internal invariant failures surfaced by [`Planner::plan`].
///
/// A search that simply fails to reach the goal is not an error; it comes
/// back as an `Ok` result with its `found` flag unset. `Err` means the
/// search bookkeeping itself is broken.
///
/// [`Planner::plan`]: crate::Planner::plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A path node links to a parent index that was never settled.
    #[error("path reconstruction: node at {child} links to unsettled parent index {parent}")]
    ParentMissing { child: Point, parent: usize },
}
