//! Grid geometry and costmap types for robot path planning.
//!
//! This crate holds the pieces every planner needs before any search runs:
//!
//! - [`Point`] and the 8-way motion set ([`MOTIONS_8`], [`step_cost`])
//! - [`Costmap`], a borrowed row-major view over `u8` cell costs
//! - [`CostmapConfig`], which turns raw costs into a blocking cutoff
//! - [`ascii`], text-format costmaps for tests and demos
//!
//! Costs follow the usual occupancy-grid convention: 0 is free space and
//! values climb toward the lethal band. A cell blocks once its cost
//! reaches `lethal_cost * obstacle_factor`; out-of-bounds cells always
//! block. Planners live in `gridnav-plan`.

pub mod ascii;
mod config;
mod costmap;
mod error;
mod geom;

pub use config::CostmapConfig;
pub use costmap::{Costmap, cost};
pub use error::CostmapError;
pub use geom::{MOTIONS_8, Point, euclidean, step_cost};
