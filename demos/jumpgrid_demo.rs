//! Generate a cave, route across it with JPS and plain A*, print both.
//!
//! Run: cargo run --bin jumpgrid-demo [seed] [width] [height]

use jumpgrid_demos::{cave_mask, compare, random_walkable};
use jumpgrid_paths::Grid;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn arg_or<T: std::str::FromStr>(args: &[String], i: usize, default: T) -> T {
    args.get(i).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = arg_or(&args, 1, 42);
    let width: i32 = arg_or(&args, 2, 60);
    let height: i32 = arg_or(&args, 3, 20);

    let mut rng = StdRng::seed_from_u64(seed);
    let mask = cave_mask(width, height, 0.42, 2, &mut rng);
    let mut grid = match Grid::new(&mask) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let (Some(start), Some(target)) = (
        random_walkable(&mask, &mut rng),
        random_walkable(&mask, &mut rng),
    ) else {
        eprintln!("Error: the cave has no floor");
        std::process::exit(1);
    };

    let cmp = compare(&mut grid, start, target);
    print!("{}", grid.render(start, target, cmp.pruned.as_ref()));
    println!("seed {seed}, {start} -> {target}");
    match (&cmp.pruned, &cmp.plain) {
        (Some(jps), Some(astar)) => {
            println!(
                "jps:   cost {:>5}, {:>3} waypoints, {:>5} expanded, {:>5} pushed",
                jps.cost(),
                jps.len(),
                cmp.pruned_stats.expanded,
                cmp.pruned_stats.pushed
            );
            println!(
                "astar: cost {:>5}, {:>3} waypoints, {:>5} expanded, {:>5} pushed",
                astar.cost(),
                astar.len(),
                cmp.plain_stats.expanded,
                cmp.plain_stats.pushed
            );
        }
        _ => println!(
            "no path ({} / {} cells expanded)",
            cmp.pruned_stats.expanded, cmp.plain_stats.expanded
        ),
    }
}
