//! Path reconstruction and post-processing helpers.

use gridnav_core::{Point, euclidean};

use crate::closed_set::ClosedSet;
use crate::error::PlanError;
use crate::node::Node;

/// Walk parent links back from `goal` and return the path start-first.
pub(crate) fn reconstruct(
    closed: &ClosedSet,
    start_idx: usize,
    goal: Node,
) -> Result<Vec<Node>, PlanError> {
    let mut path = vec![goal];
    let mut node = goal;
    while let Some(parent) = node.parent {
        let Some(next) = closed.get(parent) else {
            log::error!(
                "path reconstruction failed: node at {} links to unsettled parent index {parent}",
                node.pos
            );
            return Err(PlanError::ParentMissing {
                child: node.pos,
                parent,
            });
        };
        node = next;
        path.push(node);
    }
    debug_assert_eq!(node.idx, start_idx, "parent chain must end at the start");
    path.reverse();
    Ok(path)
}

/// Expand a jump-point path into unit steps, one point per traversed cell.
///
/// Segments between consecutive nodes are walked diagonally first and then
/// straight, which reproduces the cells a jump scan skipped over. Endpoints
/// are included once each.
pub fn interpolate(path: &[Node]) -> Vec<Point> {
    if path.len() <= 1 {
        return path.iter().map(|n| n.pos).collect();
    }
    let mut out = Vec::new();
    for window in path.windows(2) {
        let (a, b) = (window[0].pos, window[1].pos);
        let mut c = a;
        while c != b {
            out.push(c);
            c = c + Point::new((b.x - c.x).signum(), (b.y - c.y).signum());
        }
    }
    out.push(path[path.len() - 1].pos);
    out
}

/// Total Euclidean length of a path, summed over consecutive nodes.
pub fn path_length(path: &[Node]) -> f64 {
    path.windows(2)
        .map(|w| euclidean(w[0].pos, w[1].pos))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    fn node(pos: Point, idx: usize, parent: Option<usize>) -> Node {
        Node {
            pos,
            idx,
            parent,
            g: 0.0,
            h: 0.0,
        }
    }

    #[test]
    fn reconstruct_orders_start_first() {
        // 4-wide grid: chain (0,0) -> (2,0) -> (3,1).
        let mut closed = ClosedSet::new(8);
        let start = node(Point::new(0, 0), 0, None);
        let mid = node(Point::new(2, 0), 2, Some(0));
        let goal = node(Point::new(3, 1), 7, Some(2));
        closed.insert(start);
        closed.insert(mid);
        closed.insert(goal);

        let path = reconstruct(&closed, 0, goal).unwrap();
        assert_eq!(path, vec![start, mid, goal]);
    }

    #[test]
    fn reconstruct_reports_missing_parent() {
        let mut closed = ClosedSet::new(8);
        let goal = node(Point::new(3, 1), 7, Some(2));
        closed.insert(goal);

        let err = reconstruct(&closed, 0, goal).unwrap_err();
        assert_eq!(
            err,
            PlanError::ParentMissing {
                child: Point::new(3, 1),
                parent: 2,
            }
        );
    }

    #[test]
    fn reconstruct_single_node() {
        let mut closed = ClosedSet::new(4);
        let start = node(Point::new(1, 0), 1, None);
        closed.insert(start);
        assert_eq!(reconstruct(&closed, 1, start).unwrap(), vec![start]);
    }

    #[test]
    fn interpolate_straight_segment() {
        let path = [
            node(Point::new(0, 0), 0, None),
            node(Point::new(3, 0), 3, Some(0)),
        ];
        assert_eq!(
            interpolate(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
            ]
        );
    }

    #[test]
    fn interpolate_diagonal_then_straight() {
        let path = [
            node(Point::new(0, 0), 0, None),
            node(Point::new(3, 1), 0, Some(0)),
        ];
        assert_eq!(
            interpolate(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
            ]
        );
    }

    #[test]
    fn interpolate_trivial_paths() {
        assert!(interpolate(&[]).is_empty());
        let single = [node(Point::new(2, 2), 0, None)];
        assert_eq!(interpolate(&single), vec![Point::new(2, 2)]);
    }

    #[test]
    fn length_sums_segments() {
        let path = [
            node(Point::new(0, 0), 0, None),
            node(Point::new(3, 0), 0, Some(0)),
            node(Point::new(5, 2), 0, Some(0)),
        ];
        let len = path_length(&path);
        assert!((len - (3.0 + 2.0 * SQRT_2)).abs() < 1e-9);
        assert_eq!(path_length(&path[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
