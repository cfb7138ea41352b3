//! Directional jump scans and forced-neighbor detection.
//!
//! A jump scan walks a straight ray of cells and stops at the first cell
//! that matters to the search: the goal, a cell with a forced neighbor,
//! or (for diagonal rays) a cell whose straight probes hit one of those.
//! Everything in between is skipped without touching the open list, which
//! is what makes Jump Point Search cheap on open maps.

use gridnav_core::{Costmap, Point, step_cost};

/// Scan from `from` along the unit offset `dir`.
///
/// Returns the next jump point on the ray and the traversal cost
/// accumulated on top of `g`, or `None` when the ray runs into a blocked
/// cell or leaves the grid first. The goal always terminates a scan, even
/// when the cell would not otherwise qualify as a jump point.
pub(crate) fn jump(
    map: &Costmap<'_>,
    goal: Point,
    from: Point,
    g: f64,
    dir: Point,
) -> Option<(Point, f64)> {
    let step = step_cost(dir);
    let diagonal = dir.is_diagonal();
    let mut pos = from;
    let mut g = g;

    loop {
        pos = pos + dir;
        g += step;
        if map.is_blocked(pos) {
            return None;
        }
        if pos == goal {
            return Some((pos, g));
        }
        // A diagonal scan stops where a straight scan along either of its
        // component axes would find something; those probes do not recurse
        // further.
        if diagonal
            && (probe(map, goal, pos, Point::new(dir.x, 0))
                || probe(map, goal, pos, Point::new(0, dir.y)))
        {
            return Some((pos, g));
        }
        if has_forced_neighbor(map, pos, dir) {
            return Some((pos, g));
        }
    }
}

/// Straight scan used from diagonal rays: reports whether a jump point
/// (goal or forced neighbor) exists along `dir` before the ray dies.
fn probe(map: &Costmap<'_>, goal: Point, from: Point, dir: Point) -> bool {
    let mut pos = from;
    loop {
        pos = pos + dir;
        if map.is_blocked(pos) {
            return false;
        }
        if pos == goal || has_forced_neighbor(map, pos, dir) {
            return true;
        }
    }
}

/// Whether `p`, reached while scanning along `dir`, has a forced neighbor.
///
/// A neighbor is forced when an adjacent wall makes a path through `p`
/// the only optimal way around it: a blocked cell beside the ray with an
/// open cell diagonally past the wall. Out-of-bounds cells count as
/// blocked, so grid edges never force anything.
pub(crate) fn has_forced_neighbor(map: &Costmap<'_>, p: Point, dir: Point) -> bool {
    let Point { x: dx, y: dy } = dir;
    if dx != 0 && dy != 0 {
        // Diagonal: a wall behind either component axis.
        (map.is_blocked(p + Point::new(-dx, 0)) && !map.is_blocked(p + Point::new(-dx, dy)))
            || (map.is_blocked(p + Point::new(0, -dy)) && !map.is_blocked(p + Point::new(dx, -dy)))
    } else if dx != 0 {
        // Horizontal: a wall directly above or below.
        (map.is_blocked(p + Point::new(0, 1)) && !map.is_blocked(p + Point::new(dx, 1)))
            || (map.is_blocked(p + Point::new(0, -1)) && !map.is_blocked(p + Point::new(dx, -1)))
    } else {
        // Vertical: a wall directly left or right.
        (map.is_blocked(p + Point::new(1, 0)) && !map.is_blocked(p + Point::new(1, dy)))
            || (map.is_blocked(p + Point::new(-1, 0)) && !map.is_blocked(p + Point::new(-1, dy)))
    }
}
