//! Plan across ASCII costmaps and print the searched paths.
//!
//! Run: cargo run --bin plan-demo

use std::collections::HashSet;
use std::error::Error;

use gridnav_core::{CostmapConfig, Point, ascii, cost};
use gridnav_plan::{JumpPointPlanner, PlanResult, Planner, interpolate, path_length};

/// Three wall lines with offset gaps.
const OFFICE: &str = "
....#....#........
....#....#...#....
....#....#...#....
....#....#...#....
.........#...#....
....#....#...#....
....#........#....
....#....#...#....
....#....#...#....
";

/// The goal sits inside a sealed room.
const SEALED: &str = "
......
.####.
.#..#.
.####.
......
";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let planner = JumpPointPlanner::with_defaults();
    let config = CostmapConfig::default();

    let office = ascii::parse(OFFICE)?;
    let start = Point::new(0, 0);
    let goal = Point::new(17, 8);
    let result = planner.plan(&office.view(&config), start, goal)?;
    if result.found {
        println!(
            "office: path with {} jump points, {:.3} cells long, {} nodes pushed",
            result.path.len(),
            path_length(&result.path),
            result.expanded.len()
        );
        println!("{}", render(&office, &result, start, goal));
    } else {
        println!("office: no path from {start} to {goal}");
    }

    let sealed = ascii::parse(SEALED)?;
    let start = Point::new(0, 0);
    let goal = Point::new(2, 2);
    let result = planner.plan(&sealed.view(&config), start, goal)?;
    if result.found {
        println!("sealed: unexpected path into the closed room");
    } else {
        println!(
            "sealed: no path from {start} to {goal}, gave up after {} pushed nodes",
            result.expanded.len()
        );
    }
    Ok(())
}

/// Draw the map with the path overlaid: `o` jump points, `+` the cells
/// in between, `S`/`G` the endpoints.
fn render(map: &ascii::AsciiMap, result: &PlanResult, start: Point, goal: Point) -> String {
    let steps: HashSet<Point> = interpolate(&result.path).into_iter().collect();
    let jumps: HashSet<Point> = result.path.iter().map(|n| n.pos).collect();
    let mut out = String::new();
    for y in 0..map.height {
        for x in 0..map.width {
            let p = Point::new(x as i32, y as i32);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if jumps.contains(&p) {
                'o'
            } else if steps.contains(&p) {
                '+'
            } else {
                glyph(map.costs[y * map.width + x])
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn glyph(c: u8) -> char {
    match c {
        cost::FREE => '.',
        cost::NEAR_OBSTACLE => '~',
        cost::INFLATED => '*',
        _ => '#',
    }
}
