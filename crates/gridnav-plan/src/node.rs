//! Search nodes produced and consumed by the planner.

use gridnav_core::Point;

/// A cell on the search frontier or in a finished path.
///
/// `idx` is the cell's linear index in its costmap and doubles as the node
/// id; `parent` is the linear index of the node it was reached from, with
/// `None` marking the start. Costs are `g` (accumulated traversal cost from
/// the start) and `h` (Euclidean distance to the goal).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub idx: usize,
    pub parent: Option<usize>,
    pub g: f64,
    pub h: f64,
}

impl Node {
    /// Total estimated cost through this node.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_is_g_plus_h() {
        let n = Node {
            pos: Point::new(2, 1),
            idx: 7,
            parent: Some(0),
            g: 3.0,
            h: 4.5,
        };
        assert_eq!(n.f(), 7.5);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn node_round_trip() {
            let n = Node {
                pos: Point::new(5, 9),
                idx: 41,
                parent: None,
                g: 0.0,
                h: 2.5,
            };
            let json = serde_json::to_string(&n).unwrap();
            let back: Node = serde_json::from_str(&json).unwrap();
            assert_eq!(n, back);
        }
    }
}
