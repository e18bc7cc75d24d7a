//! Read a height map from stdin and report both summit distances.
//!
//! Run: cargo run --example summit < map.txt

use std::io::Read;

use ridge_paths::PathRange;
use ridge_relief::{HeightMap, distance_from_lowest, distance_from_start};

fn main() {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let map = match HeightMap::parse(&input) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut pr = PathRange::new(map.bounds());

    match distance_from_start(&map, &mut pr) {
        Some(d) => println!("Distance to summit from start: {d}"),
        None => println!("Summit unreachable from start"),
    }
    match distance_from_lowest(&map, &mut pr) {
        Some(d) => println!("Distance to summit from lowest elevation: {d}"),
        None => println!("Summit unreachable from any lowest cell"),
    }
}
