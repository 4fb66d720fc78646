//! Route between two points of a navigation mesh with both search shapes.
//!
//! Run: cargo run --bin mesh_route [mesh.json SX SY DX DY]
//!
//! Without arguments a small built-in mesh is used.

use std::error::Error;

use wayfinder_mesh::{Mesh, NavBox, Point, SearchConfig, Strategy};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (mesh, src, dst) = match args {
        [path, sx, sy, dx, dy] => {
            let text = std::fs::read_to_string(path)?;
            let mesh: Mesh = serde_json::from_str(&text)?;
            (
                mesh,
                Point::new(sx.parse()?, sy.parse()?),
                Point::new(dx.parse()?, dy.parse()?),
            )
        }
        [] => (demo_mesh(), Point::new(2.0, 3.0), Point::new(57.0, 36.0)),
        _ => return Err("usage: mesh_route [mesh.json SX SY DX DY]".into()),
    };
    println!("{} boxes, {src} -> {dst}", mesh.len());

    for strategy in [Strategy::Unidirectional, Strategy::Bidirectional] {
        println!("\n{strategy:?}:");
        match mesh.find_path_with(src, dst, &SearchConfig { strategy })? {
            Some(path) => {
                let points: Vec<String> = path.points.iter().map(ToString::to_string).collect();
                println!("  points: {}", points.join(" "));
                let boxes: Vec<String> = path.boxes.iter().map(ToString::to_string).collect();
                println!("  boxes:  {}", boxes.join(" "));
                println!("  length: {:.2}", path.length());
            }
            None => println!("  No path possible!"),
        }
    }
    Ok(())
}

/// Two rooms joined by a bent corridor, and a dead-end closet off the first.
fn demo_mesh() -> Mesh {
    let room1 = NavBox::new(0, 20, 0, 20);
    let bend = NavBox::new(20, 30, 0, 20);
    let corridor = NavBox::new(20, 40, 20, 30);
    let room2 = NavBox::new(40, 60, 15, 40);
    let closet = NavBox::new(0, 20, 20, 25);

    let mut mesh = Mesh::new();
    mesh.connect(room1, bend);
    mesh.connect(bend, corridor);
    mesh.connect(corridor, room2);
    mesh.connect(room1, closet);
    mesh
}
