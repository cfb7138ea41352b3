//! ASCII costmaps for tests, demos and fixtures.
//!
//! A map is a block of text where every character is one cell and lines
//! are rows. The default glyph set:
//!
//! | glyph | cost | meaning |
//! |-------|------|--------------------------------------|
//! | `.`   | 0    | free                                 |
//! | `~`   | 120  | costly, traversable by default       |
//! | `*`   | 200  | inflated, blocked by default         |
//! | `#`   | 254  | lethal obstacle                      |

use crate::config::CostmapConfig;
use crate::costmap::{Costmap, cost};
use crate::error::CostmapError;

/// An owned cost grid parsed from text.
///
/// Construction goes through [`parse`] or [`parse_with`], which guarantee
/// non-zero dimensions and `costs.len() == width * height`, so [`view`]
/// can hand out a [`Costmap`] without re-validating.
///
/// [`view`]: AsciiMap::view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    pub costs: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl AsciiMap {
    /// Borrow the grid as a [`Costmap`] under the given interpretation.
    pub fn view(&self, config: &CostmapConfig) -> Costmap<'_> {
        Costmap::from_parts(&self.costs, self.width, self.height, config.cutoff())
    }
}

/// Parse a map using the default glyph table.
pub fn parse(text: &str) -> Result<AsciiMap, CostmapError> {
    parse_with(text, |ch| match ch {
        '.' => Some(cost::FREE),
        '~' => Some(cost::NEAR_OBSTACLE),
        '*' => Some(cost::INFLATED),
        '#' => Some(cost::LETHAL),
        _ => None,
    })
}

/// Parse a map with a caller-supplied glyph-to-cost mapping.
///
/// Whitespace around the text and around each line is trimmed, so maps
/// can be written as indented raw strings. Every line must have the same
/// width and every character must be covered by `f`. Line numbers in
/// errors are 1-based.
pub fn parse_with(
    text: &str,
    f: impl Fn(char) -> Option<u8>,
) -> Result<AsciiMap, CostmapError> {
    let text = text.trim();
    let mut costs = Vec::with_capacity(text.len());
    let mut width = 0usize;
    let mut height = 0usize;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        let mut row_width = 0usize;
        for ch in line.chars() {
            match f(ch) {
                Some(c) => costs.push(c),
                None => {
                    return Err(CostmapError::UnknownGlyph {
                        glyph: ch,
                        line: i + 1,
                    });
                }
            }
            row_width += 1;
        }
        if i == 0 {
            width = row_width;
        } else if row_width != width {
            return Err(CostmapError::RaggedLine {
                line: i + 1,
                expected: width,
                actual: row_width,
            });
        }
        height += 1;
    }

    if width == 0 || height == 0 {
        return Err(CostmapError::ZeroDimension);
    }
    Ok(AsciiMap {
        costs,
        width,
        height,
    })
}
