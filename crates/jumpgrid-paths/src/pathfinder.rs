use jumpgrid_core::Point;

use crate::config::{NeighborMode, SearchConfig};
use crate::distance::octile;
use crate::grid::Grid;
use crate::open_set::OpenSet;

/// A path found by [`PathFinder::get_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    waypoints: Vec<Point>,
    cost: i32,
}

impl Path {
    /// The cells retraced from the target's parent links, start first and
    /// target last. Consecutive waypoints lie on a common row, column or
    /// diagonal.
    #[inline]
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Total cost in octile units (10 per straight step, 14 per diagonal).
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First waypoint, where the search started.
    #[inline]
    pub fn start(&self) -> Point {
        self.waypoints[0]
    }

    /// Last waypoint, the target of the search.
    #[inline]
    pub fn target(&self) -> Point {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Expand the waypoints into unit steps, every consecutive pair of
    /// points being 8-adjacent.
    pub fn steps(&self) -> Vec<Point> {
        let mut steps = vec![self.start()];
        for w in self.waypoints.windows(2) {
            let (mut c, b) = (w[0], w[1]);
            while c != b {
                c = c + (b - c).signum();
                steps.push(c);
            }
        }
        steps
    }
}

/// Counters for the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells taken off the open set and expanded (the target excluded).
    pub expanded: usize,
    /// Cells added to the open set, the start included.
    pub pushed: usize,
}

/// Lowest-cost path search over a [`Grid`].
///
/// A `PathFinder` is independent from any particular grid: it owns the open
/// set and scratch buffers and reuses them across calls, while all per-cell
/// state lives in the grid passed to [`get_path`](Self::get_path).
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: SearchConfig,
    open: OpenSet,
    stats: SearchStats,
    successors: Vec<Point>,
    jump_points: Vec<Point>,
}

impl PathFinder {
    /// Create a path finder using Jump Point Search.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters of the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Every successor produced during the last search, in discovery order.
    ///
    /// Empty unless [`SearchConfig::record_jump_points`] is set.
    #[inline]
    pub fn jump_points(&self) -> &[Point] {
        &self.jump_points
    }

    /// Compute a lowest-cost path from `start` to `target`.
    ///
    /// Returns the path including both endpoints, or `None` if `target`
    /// cannot be reached or either endpoint lies outside the grid. Whether
    /// the endpoints are walkable is not checked; snap them with
    /// [`Grid::clamp_to_grid`] or [`Grid::cell_at`] first.
    pub fn get_path(&mut self, grid: &mut Grid, start: Point, target: Point) -> Option<Path> {
        self.stats = SearchStats::default();
        self.jump_points.clear();

        let (Some(si), Some(ti)) = (grid.idx(start), grid.idx(target)) else {
            log::debug!("{start} -> {target}: endpoint outside {}", grid.range());
            return None;
        };

        let found = self.search(grid, si, ti);
        let path = found.then(|| Self::retrace(grid, ti));
        self.open.clear(grid.cells_mut());

        log::debug!(
            "{:?} {start} -> {target}: {} ({} expanded, {} pushed)",
            self.config.neighbors,
            path.as_ref()
                .map_or_else(|| "no path".to_string(), |p| format!("cost {}", p.cost())),
            self.stats.expanded,
            self.stats.pushed,
        );
        path
    }

    /// Run the open/closed-set loop. Returns `true` once the target is
    /// extracted; the open set is left as it was at that point.
    pub(crate) fn search(&mut self, grid: &mut Grid, si: usize, ti: usize) -> bool {
        debug_assert!(self.open.is_empty());
        grid.begin_search();
        let target = grid.point(ti);
        {
            let h = octile(grid.point(si), target);
            let start = grid.touch(si);
            start.g = 0;
            start.h = h;
            start.parent = None;
        }
        self.open.insert(grid.cells_mut(), si);
        self.stats.pushed += 1;

        while let Some(ci) = self.open.extract_min(grid.cells_mut()) {
            if ci == ti {
                return true;
            }
            let current = grid.point(ci);
            let current_g = {
                let cell = grid.touch(ci);
                cell.closed = true;
                log::trace!("expand {current} f={} g={} h={}", cell.f(), cell.g, cell.h);
                cell.g
            };
            self.stats.expanded += 1;

            self.collect_successors(grid, current, target);
            if self.config.record_jump_points {
                self.jump_points.extend_from_slice(&self.successors);
            }

            for &jp in &self.successors {
                let Some(ji) = grid.idx(jp) else {
                    continue;
                };
                if grid.touch(ji).closed {
                    continue;
                }
                let tentative_g = current_g + octile(current, jp);
                let in_open = self.open.contains(grid.cells(), ji);
                if in_open && tentative_g >= grid.cells()[ji].g {
                    continue;
                }
                let h = octile(jp, target);
                let cell = grid.touch(ji);
                cell.g = tentative_g;
                cell.h = h;
                cell.parent = Some(ci);
                if in_open {
                    self.open.decrease_key(grid.cells_mut(), ji);
                } else {
                    self.open.insert(grid.cells_mut(), ji);
                    self.stats.pushed += 1;
                }
            }
        }
        false
    }

    fn collect_successors(&mut self, grid: &Grid, current: Point, target: Point) {
        self.successors.clear();
        match self.config.neighbors {
            NeighborMode::Pruned => {
                for dir in grid.pruned_neighbors(current) {
                    if let Some(jp) = Self::jump(grid, current + dir, dir, target) {
                        self.successors.push(jp);
                    }
                }
            }
            NeighborMode::All => {
                self.successors
                    .extend(grid.all_neighbors(current).into_iter().map(|d| current + d));
            }
        }
    }

    /// Follow parent links back from the target.
    fn retrace(grid: &Grid, ti: usize) -> Path {
        let cells = grid.cells();
        let mut waypoints = Vec::new();
        let mut next = Some(ti);
        while let Some(i) = next {
            waypoints.push(grid.point(i));
            next = cells[i].parent;
        }
        waypoints.reverse();
        Path {
            waypoints,
            cost: cells[ti].g,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpgrid_core::WalkMask;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn grid(s: &str) -> Grid {
        Grid::new(&WalkMask::parse(s).unwrap()).unwrap()
    }

    fn astar() -> PathFinder {
        PathFinder::with_config(SearchConfig {
            neighbors: NeighborMode::All,
            ..SearchConfig::default()
        })
    }

    /// Every step is legal and the step costs add up to the path cost.
    fn assert_valid(g: &Grid, path: &Path, start: Point, target: Point) {
        assert_eq!(path.start(), start);
        assert_eq!(path.target(), target);
        let steps = path.steps();
        let mut cost = 0;
        for w in steps.windows(2) {
            let d = w[1] - w[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != Point::ZERO);
            assert!(g.can_step(w[0], d), "illegal step {} -> {}", w[0], w[1]);
            cost += octile(w[0], w[1]);
        }
        assert!(steps.iter().all(|&p| g.is_walkable(p)));
        assert_eq!(cost, path.cost());
    }

    const MAZE: &str = "
        ..........
        .########.
        .#......#.
        .#.####.#.
        .#.#..#.#.
        .#.#.##.#.
        .#.#....#.
        .#.######.
        .#........
        ..........
    ";

    #[test]
    fn open_grid_diagonal_is_a_single_jump() {
        let mut g = Grid::new(&WalkMask::new(5, 5, true)).unwrap();
        let mut pf = PathFinder::new();
        let path = pf.get_path(&mut g, Point::new(0, 0), Point::new(4, 4)).unwrap();
        assert_eq!(path.cost(), 56);
        assert_eq!(path.waypoints(), &[Point::new(0, 0), Point::new(4, 4)]);
        assert_eq!(path.steps().len(), 5);
        assert_eq!(pf.stats().expanded, 1);
    }

    #[test]
    fn open_grid_cost_is_octile_distance() {
        let mut g = Grid::new(&WalkMask::new(20, 20, true)).unwrap();
        let mut pf = PathFinder::new();
        for (s, t) in [
            (Point::new(0, 0), Point::new(19, 13)),
            (Point::new(17, 2), Point::new(3, 18)),
            (Point::new(5, 5), Point::new(5, 16)),
            (Point::new(19, 19), Point::new(0, 19)),
        ] {
            let path = pf.get_path(&mut g, s, t).unwrap();
            assert_eq!(path.cost(), octile(s, t), "{s} -> {t}");
            assert_valid(&g, &path, s, t);
        }
    }

    #[test]
    fn wall_with_single_gap_forces_detour() {
        // Column x = 2 is blocked except at the top row (y = 4).
        let mut g = grid(
            "
            .....
            ..#..
            ..#..
            ..#..
            ..#..
            ",
        );
        let (s, t) = (Point::new(0, 0), Point::new(4, 0));
        let mut pf = PathFinder::new();
        let path = pf.get_path(&mut g, s, t).unwrap();
        assert_valid(&g, &path, s, t);
        assert!(path.steps().contains(&Point::new(2, 4)));
        assert_eq!(path.cost(), 96);

        let reference = astar().get_path(&mut g, s, t).unwrap();
        assert_eq!(reference.cost(), 96);
    }

    #[test]
    fn enclosed_target_has_no_path() {
        let mut g = grid(
            "
            .....
            .###.
            .#.#.
            .###.
            .....
            ",
        );
        let mut pf = PathFinder::new();
        assert_eq!(pf.get_path(&mut g, Point::new(0, 0), Point::new(2, 2)), None);
        assert!(pf.stats().expanded > 0);
        assert_eq!(astar().get_path(&mut g, Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn start_equals_target() {
        let mut g = Grid::new(&WalkMask::new(3, 3, true)).unwrap();
        let mut pf = PathFinder::new();
        let p = Point::new(1, 2);
        let path = pf.get_path(&mut g, p, p).unwrap();
        assert_eq!(path.waypoints(), &[p]);
        assert_eq!(path.cost(), 0);
        assert_eq!(path.steps(), vec![p]);
        assert_eq!(pf.stats().expanded, 0);
    }

    #[test]
    fn endpoint_off_grid_has_no_path() {
        let mut g = Grid::new(&WalkMask::new(3, 3, true)).unwrap();
        let mut pf = PathFinder::new();
        assert_eq!(pf.get_path(&mut g, Point::new(-1, 0), Point::new(2, 2)), None);
        assert_eq!(pf.get_path(&mut g, Point::new(0, 0), Point::new(3, 2)), None);
    }

    #[test]
    fn pruned_search_expands_no_more_than_plain_astar() {
        let mut g = Grid::new(&WalkMask::new(20, 20, true)).unwrap();
        let (s, t) = (Point::new(0, 0), Point::new(19, 13));

        let mut jps = PathFinder::new();
        let a = jps.get_path(&mut g, s, t).unwrap();
        let mut plain = astar();
        let b = plain.get_path(&mut g, s, t).unwrap();

        assert_eq!(a.cost(), b.cost());
        assert!(jps.stats().expanded <= plain.stats().expanded);
        assert!(jps.stats().expanded < 5);
    }

    #[test]
    fn maze_costs_agree_with_plain_astar() {
        let mut g = grid(MAZE);
        let mut jps = PathFinder::new();
        let mut plain = astar();
        for (s, t) in [
            (Point::new(0, 0), Point::new(4, 5)),
            (Point::new(9, 9), Point::new(2, 2)),
            (Point::new(0, 9), Point::new(9, 0)),
            (Point::new(5, 3), Point::new(2, 7)),
        ] {
            let a = jps.get_path(&mut g, s, t).unwrap();
            let b = plain.get_path(&mut g, s, t).unwrap();
            assert_eq!(a.cost(), b.cost(), "{s} -> {t}");
            assert_valid(&g, &a, s, t);
            assert_valid(&g, &b, s, t);
        }
    }

    #[test]
    fn repeated_searches_return_identical_paths() {
        let mut g = grid(MAZE);
        let mut pf = PathFinder::new();
        let (s, t) = (Point::new(0, 0), Point::new(4, 5));
        let first = pf.get_path(&mut g, s, t).unwrap();
        let second = pf.get_path(&mut g, s, t).unwrap();
        assert_eq!(first, second);

        // An unrelated search in between leaves stale costs in shared cells.
        pf.get_path(&mut g, Point::new(9, 0), Point::new(5, 3)).unwrap();
        let third = pf.get_path(&mut g, s, t).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn reinitialized_grid_is_searched_afresh() {
        let mut g = Grid::new(&WalkMask::new(5, 5, true)).unwrap();
        let mut pf = PathFinder::new();
        let (s, t) = (Point::new(0, 0), Point::new(4, 0));
        assert_eq!(pf.get_path(&mut g, s, t).unwrap().cost(), 40);

        let walled = WalkMask::from_fn(5, 5, |p| p.x != 2 || p.y == 4);
        g.initialize(5, 5, &walled).unwrap();
        let path = pf.get_path(&mut g, s, t).unwrap();
        assert_eq!(path.cost(), 96);
        assert_valid(&g, &path, s, t);
    }

    #[test]
    fn one_finder_serves_several_grids() {
        let mut small = Grid::new(&WalkMask::new(3, 3, true)).unwrap();
        let mut large = Grid::new(&WalkMask::new(30, 30, true)).unwrap();
        let mut pf = PathFinder::new();
        let a = pf.get_path(&mut large, Point::new(0, 0), Point::new(29, 10)).unwrap();
        let b = pf.get_path(&mut small, Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!(a.cost(), octile(Point::new(0, 0), Point::new(29, 10)));
        assert_eq!(b.cost(), 24);
    }

    #[test]
    fn expanded_cells_never_remain_open() {
        let mut g = grid(MAZE);
        let mut pf = PathFinder::new();
        let si = g.idx(Point::new(0, 0)).unwrap();
        let ti = g.idx(Point::new(4, 5)).unwrap();
        assert!(pf.search(&mut g, si, ti));

        let mut closed = 0;
        for i in 0..g.len() {
            let cell = &g.cells()[i];
            if cell.closed && cell.generation == g.cells()[si].generation {
                closed += 1;
                assert!(!pf.open.contains(g.cells(), i), "{} is closed and open", cell.pos());
            }
        }
        assert!(closed > 0);
        assert!(!pf.open.contains(g.cells(), ti));
        pf.open.clear(g.cells_mut());
    }

    #[test]
    fn jump_points_are_recorded_on_request() {
        let mut g = grid(MAZE);
        let (s, t) = (Point::new(0, 0), Point::new(9, 9));

        let mut pf = PathFinder::new();
        let path = pf.get_path(&mut g, s, t).unwrap();
        assert!(!pf.jump_points().is_empty());
        for w in &path.waypoints()[1..] {
            assert!(pf.jump_points().contains(w));
        }

        let mut quiet = PathFinder::with_config(SearchConfig {
            record_jump_points: false,
            ..SearchConfig::default()
        });
        assert_eq!(quiet.get_path(&mut g, s, t).unwrap(), path);
        assert!(quiet.jump_points().is_empty());
    }

    #[test]
    fn parents_point_back_along_the_path() {
        let mut g = grid(MAZE);
        let mut pf = PathFinder::new();
        let path = pf.get_path(&mut g, Point::new(9, 9), Point::new(2, 2)).unwrap();
        let wps = path.waypoints();
        assert_eq!(g.parent_of(wps[0]), None);
        for w in wps.windows(2) {
            assert_eq!(g.parent_of(w[1]), Some(w[0]));
        }
    }

    #[test]
    fn random_grids_match_plain_astar_cost() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut jps = PathFinder::new();
        let mut plain = astar();
        for round in 0..500 {
            let width = rng.random_range(2..=15);
            let height = rng.random_range(2..=15);
            let wall_pct: f64 = rng.random_range(0.0..0.5);
            let mut mask = WalkMask::from_fn(width, height, |_| rng.random::<f64>() >= wall_pct);
            let s = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            let t = Point::new(rng.random_range(0..width), rng.random_range(0..height));
            mask.set(s, true);
            mask.set(t, true);

            let mut g = Grid::new(&mask).unwrap();
            let a = jps.get_path(&mut g, s, t);
            let b = plain.get_path(&mut g, s, t);
            assert_eq!(
                a.as_ref().map(Path::cost),
                b.as_ref().map(Path::cost),
                "round {round}: {s} -> {t}"
            );
            if let Some(path) = &a {
                assert_valid(&g, path, s, t);
            }
        }
    }
}
