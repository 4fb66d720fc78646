//! Route between two waypoints of a grid level.
//!
//! Run: cargo run --bin grid_route [level.json SRC DST]
//!
//! Without arguments a seeded random level is used, routed from `a` to `b`.

use std::error::Error;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfinder_grid::{
    Cell, CharGrid, Connectivity, DirectAdjacency, Level, shortest_path, shortest_path_to_all,
};

const WIDTH: i32 = 32;
const HEIGHT: i32 = 12;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (level, src_label, dst_label) = match args {
        [path, src, dst] => {
            let text = std::fs::read_to_string(path)?;
            let level: Level = serde_json::from_str(&text)?;
            (level, label(src)?, label(dst)?)
        }
        [] => (random_level(42)?, 'a', 'b'),
        _ => return Err("usage: grid_route [level.json SRC DST]".into()),
    };

    let src = level
        .waypoint(src_label)
        .ok_or_else(|| format!("no waypoint {src_label:?}"))?;
    let dst = level
        .waypoint(dst_label)
        .ok_or_else(|| format!("no waypoint {dst_label:?}"))?;

    let grid = match CharGrid::from_level(&level, Connectivity::Eight) {
        Ok(grid) => {
            println!("{grid}\n");
            Some(grid)
        }
        Err(e) => {
            eprintln!("not drawing the level: {e}");
            None
        }
    };

    let adj = DirectAdjacency::eight(&level);
    match shortest_path(&adj, src, dst) {
        Some(path) => {
            if let Some(grid) = &grid {
                println!("{}\n", overlay(grid, &path.cells));
            }
            println!(
                "{src_label} {src} -> {dst_label} {dst}: {} steps, cost {}",
                path.len() - 1,
                path.cost
            );
        }
        None => println!("No path possible!"),
    }

    let table = shortest_path_to_all(&adj, src);
    println!(
        "{} of {} spaces reachable from {src_label} {}",
        table.len(),
        level.space_count(),
        table.source()
    );
    Ok(())
}

fn label(s: &str) -> Result<char, Box<dyn Error>> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("waypoint label must be one character, got {s:?}").into()),
    }
}

/// Random level: about a fifth walls, spaces costing 1..=9, `a` and `b`
/// placed on the first and last space in row-major order.
fn random_level(seed: u64) -> Result<Level, Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut level = Level::new();
    let mut spaces = Vec::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let c = Cell::new(x, y);
            if rng.random_bool(0.2) {
                level.insert_wall(c)?;
            } else {
                level.insert_space(c, rng.random_range(1..=9))?;
                spaces.push(c);
            }
        }
    }
    let (Some(&first), Some(&last)) = (spaces.first(), spaces.last()) else {
        return Err("random level has no spaces".into());
    };
    level.set_waypoint('a', first)?;
    level.set_waypoint('b', last)?;
    Ok(level)
}

/// The grid's text with path cells between the endpoints drawn as `*`.
fn overlay(grid: &CharGrid, path: &[Cell]) -> String {
    let mut rows: Vec<Vec<char>> = grid.to_string().lines().map(|l| l.chars().collect()).collect();
    let inner = path.get(1..path.len().saturating_sub(1)).unwrap_or(&[]);
    for c in inner {
        let x = (c.x - grid.origin().x) as usize;
        let y = (c.y - grid.origin().y) as usize;
        if let Some(ch) = rows.get_mut(y).and_then(|r| r.get_mut(x)) {
            *ch = '*';
        }
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
