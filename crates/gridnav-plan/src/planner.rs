//! Jump Point Search over a costmap.

use std::time::{Duration, Instant};

use gridnav_core::{Costmap, MOTIONS_8, Point, euclidean};

use crate::closed_set::ClosedSet;
use crate::error::PlanError;
use crate::jump::jump;
use crate::node::Node;
use crate::open_list::OpenList;
use crate::path::reconstruct;

/// A global planner that searches a costmap for start-to-goal paths.
pub trait Planner {
    /// Search for a path.
    ///
    /// A search that terminates without reaching the goal (walled-off
    /// goal, exhausted budget, invalid endpoints) is still `Ok` with
    /// [`PlanResult::found`] unset. `Err` is reserved for internal
    /// invariant failures.
    fn plan(&self, map: &Costmap<'_>, start: Point, goal: Point) -> Result<PlanResult, PlanError>;
}

/// Search limits. The default imposes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Give up after this many open-list pops.
    pub max_expansions: Option<usize>,
    /// Give up once this much wall-clock time has elapsed.
    pub timeout: Option<Duration>,
}

/// Outcome of one planning query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    /// Whether the goal was reached.
    pub found: bool,
    /// Jump points from start to goal. Empty when `found` is unset.
    /// Pass to [`interpolate`](crate::interpolate) for per-cell steps.
    pub path: Vec<Node>,
    /// Every node pushed onto the open list, in push order, start first.
    /// Useful for visualizing how far the search spread.
    pub expanded: Vec<Node>,
}

/// Jump Point Search planner.
///
/// An A* variant for 8-connected grids that expands straight and diagonal
/// scans instead of single cells, settling only jump points. Costs are
/// 1 per cardinal step and sqrt(2) per diagonal step, with a Euclidean
/// heuristic, so returned paths are shortest in that metric.
///
/// The search is deterministic: open-list ties are broken by smaller `h`,
/// then by insertion order, and directions are scanned in [`MOTIONS_8`]
/// order. Identical inputs give identical results.
#[derive(Debug, Clone, Default)]
pub struct JumpPointPlanner {
    config: PlannerConfig,
}

impl JumpPointPlanner {
    /// Planner with the given limits.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Planner with no limits.
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    fn out_of_budget(&self, expansions: usize, started: Instant) -> bool {
        let PlannerConfig {
            max_expansions,
            timeout,
        } = self.config;
        max_expansions.is_some_and(|limit| expansions >= limit)
            || timeout.is_some_and(|limit| started.elapsed() >= limit)
    }
}

impl Planner for JumpPointPlanner {
    fn plan(&self, map: &Costmap<'_>, start: Point, goal: Point) -> Result<PlanResult, PlanError> {
        let (Some(start_idx), Some(_)) = (map.index(start), map.index(goal)) else {
            log::warn!(
                "plan rejected: start {start} or goal {goal} outside the {}x{} grid",
                map.width(),
                map.height()
            );
            return Ok(PlanResult {
                found: false,
                path: Vec::new(),
                expanded: Vec::new(),
            });
        };
        if map.is_blocked(start) || map.is_blocked(goal) {
            log::warn!("plan rejected: start {start} or goal {goal} is blocked");
            return Ok(PlanResult {
                found: false,
                path: Vec::new(),
                expanded: Vec::new(),
            });
        }

        let start_node = Node {
            pos: start,
            idx: start_idx,
            parent: None,
            g: 0.0,
            h: euclidean(start, goal),
        };
        let mut open = OpenList::new();
        let mut closed = ClosedSet::new(map.len());
        let mut expanded = Vec::new();
        let mut expansions = 0usize;
        let started = Instant::now();

        open.push(start_node);
        expanded.push(start_node);
        log::debug!(
            "planning {start} -> {goal} on {}x{} grid",
            map.width(),
            map.height()
        );

        let goal_node = loop {
            if self.out_of_budget(expansions, started) {
                log::warn!(
                    "plan {start} -> {goal} gave up after {expansions} expansions, {:?} elapsed",
                    started.elapsed()
                );
                break None;
            }
            let Some(current) = open.pop() else {
                break None;
            };
            expansions += 1;
            if closed.contains(current.idx) {
                continue; // stale duplicate entry
            }
            if current.pos == goal {
                closed.insert(current);
                break Some(current);
            }

            for dir in MOTIONS_8 {
                let Some((pos, g)) = jump(map, goal, current.pos, current.g, dir) else {
                    continue;
                };
                let Some(idx) = map.index(pos) else {
                    continue;
                };
                if closed.contains(idx) {
                    continue;
                }
                let node = Node {
                    pos,
                    idx,
                    parent: Some(current.idx),
                    g,
                    h: euclidean(pos, goal),
                };
                open.push(node);
                expanded.push(node);
            }
            closed.insert(current);
        };

        match goal_node {
            Some(goal_node) => {
                let path = reconstruct(&closed, start_idx, goal_node)?;
                log::debug!(
                    "plan {start} -> {goal} found, cost {:.3}, {} jump points, {expansions} expansions, {} settled",
                    goal_node.g,
                    path.len(),
                    closed.len()
                );
                Ok(PlanResult {
                    found: true,
                    path,
                    expanded,
                })
            }
            None => {
                log::debug!(
                    "plan {start} -> {goal} found nothing, {expansions} expansions, {} still open",
                    open.len()
                );
                Ok(PlanResult {
                    found: false,
                    path: Vec::new(),
                    expanded,
                })
            }
        }
    }
}
