//! Shared pieces of the demo: a seeded cave generator and a side-by-side
//! run of the pruned and unpruned searches.

use jumpgrid_core::{Point, WalkMask};
use jumpgrid_paths::{Grid, NeighborMode, Path, PathFinder, SearchConfig, SearchStats};
use rand::{Rng, RngExt};

/// Generate a cave: random walls, then `passes` rounds of smoothing where a
/// cell becomes wall if at least five of its eight neighbors are walls.
/// Positions outside the map count as walls.
pub fn cave_mask(
    width: i32,
    height: i32,
    wall_pct: f64,
    passes: usize,
    rng: &mut impl Rng,
) -> WalkMask {
    let mut mask = WalkMask::from_fn(width, height, |_| {
        let r: f64 = rng.random();
        r >= wall_pct
    });
    for _ in 0..passes {
        let prev = mask.clone();
        mask = WalkMask::from_fn(width, height, |p| {
            let walls = p.neighbors_8().iter().filter(|&&n| !prev.get(n)).count();
            walls < 5
        });
    }
    mask
}

/// A random walkable position, or `None` if the mask has none.
pub fn random_walkable(mask: &WalkMask, rng: &mut impl Rng) -> Option<Point> {
    if mask.count_walkable() == 0 {
        return None;
    }
    for _ in 0..1000 {
        let p = Point::new(
            rng.random_range(0..mask.width()),
            rng.random_range(0..mask.height()),
        );
        if mask.get(p) {
            return Some(p);
        }
    }
    mask.range().iter().find(|&p| mask.get(p))
}

/// Outcome of running both search modes on the same query.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub pruned: Option<Path>,
    pub pruned_stats: SearchStats,
    pub plain: Option<Path>,
    pub plain_stats: SearchStats,
}

/// Run Jump Point Search and plain A* from `start` to `target`.
pub fn compare(grid: &mut Grid, start: Point, target: Point) -> Comparison {
    let mut jps = PathFinder::new();
    let pruned = jps.get_path(grid, start, target);

    let mut astar = PathFinder::with_config(SearchConfig {
        neighbors: NeighborMode::All,
        record_jump_points: false,
    });
    let plain = astar.get_path(grid, start, target);

    Comparison {
        pruned,
        pruned_stats: jps.stats(),
        plain,
        plain_stats: astar.stats(),
    }
}
