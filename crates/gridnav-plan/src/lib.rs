//! Jump Point Search global planning on occupancy-grid costmaps.
//!
//! The crate provides one planner behind one trait:
//!
//! - [`JumpPointPlanner`] searches a [`Costmap`] with Jump Point Search,
//!   an A* variant that scans whole rays instead of stepping cell by cell
//! - [`Planner`] is the seam other planners would implement
//! - [`PlanResult`] carries the jump-point path plus the full expansion
//!   trace; [`interpolate`] and [`path_length`] post-process it
//!
//! Planning failures are ordinary results: a walled-off goal, an invalid
//! endpoint or an exhausted [`PlannerConfig`] budget all come back as
//! `Ok` with `found` unset and an empty path. Errors are reserved for
//! broken search invariants ([`PlanError`]).
//!
//! Searches are deterministic. Identical costmaps, endpoints and limits
//! produce identical paths and expansion traces, which keeps planner
//! regressions diffable.
//!
//! [`Costmap`]: gridnav_core::Costmap

mod closed_set;
mod error;
mod jump;
mod node;
mod open_list;
mod path;
mod planner;

pub use error::PlanError;
pub use node::Node;
pub use path::{interpolate, path_length};
pub use planner::{JumpPointPlanner, PlanResult, Planner, PlannerConfig};
