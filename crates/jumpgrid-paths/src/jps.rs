//! The jump procedure of Jump Point Search.
//!
//! From a cell reached in direction `d`, keep moving in `d` until something
//! interesting happens: the target, a forced neighbor, or (when moving
//! diagonally) a straight probe that finds one. Everything skipped over is
//! reachable at least as cheaply by another route, so it never enters the
//! open set.

use jumpgrid_core::Point;

use crate::Grid;
use crate::PathFinder;

impl PathFinder {
    /// Jump from `cell` in direction `dir`.
    ///
    /// `cell` is the first cell past the expanded one; the step into it must
    /// already be legal. Returns the jump point, or `None` on hitting a wall
    /// or the grid edge. Straight runs and diagonal runs are loops; only the
    /// two straight probes made from each diagonal cell recurse, and those
    /// never recurse further.
    pub(crate) fn jump(grid: &Grid, mut cell: Point, dir: Point, target: Point) -> Option<Point> {
        loop {
            if !grid.is_walkable(cell) {
                return None;
            }
            if cell == target || grid.has_forced_neighbor(cell, dir) {
                return Some(cell);
            }
            if dir.is_diagonal() {
                let horizontal = Point::new(dir.x, 0);
                let vertical = Point::new(0, dir.y);
                if Self::jump(grid, cell + horizontal, horizontal, target).is_some()
                    || Self::jump(grid, cell + vertical, vertical, target).is_some()
                {
                    return Some(cell);
                }
                if !grid.can_step(cell, dir) {
                    return None;
                }
            }
            cell = cell + dir;
        }
    }
}
