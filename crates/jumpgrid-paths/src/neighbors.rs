//! Neighbor enumeration: the unpruned 8-way set and the JPS pruning rule.
//!
//! All functions return *directions* (unit offsets), not positions.
//!
//! Movement rule: a straight step is legal when its destination is walkable.
//! A diagonal step is legal when its destination is walkable and at least
//! one of the two orthogonal cells it passes between is walkable, so paths
//! may cut a corner but never squeeze through a diagonal gap.

use jumpgrid_core::Point;

use crate::Grid;

/// The eight unit directions.
pub const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

impl Grid {
    /// Whether a single step from `p` in direction `d` is legal.
    #[inline]
    pub fn can_step(&self, p: Point, d: Point) -> bool {
        if !self.is_walkable(p + d) {
            return false;
        }
        !d.is_diagonal()
            || self.is_walkable(p + Point::new(d.x, 0))
            || self.is_walkable(p + Point::new(0, d.y))
    }

    /// Every legal step direction out of `p`, unpruned (plain A*).
    pub fn all_neighbors(&self, p: Point) -> Vec<Point> {
        DIRECTIONS
            .into_iter()
            .filter(|&d| self.can_step(p, d))
            .collect()
    }

    /// Directions worth exploring from `p` under Jump Point Search.
    ///
    /// The travel direction is taken from `p`'s parent in the current
    /// search. Without a parent (the start cell) nothing can be pruned and
    /// every legal direction is returned. Otherwise only the natural
    /// neighbors along the travel direction and the forced neighbors created
    /// by adjacent obstacles are kept.
    pub fn pruned_neighbors(&self, p: Point) -> Vec<Point> {
        let Some(parent) = self.parent_of(p) else {
            return self.all_neighbors(p);
        };
        let d = (p - parent).signum();
        let mut dirs = Vec::with_capacity(5);

        if d.is_diagonal() {
            let horizontal = Point::new(d.x, 0);
            let vertical = Point::new(0, d.y);
            let walk_x = self.is_walkable(p + horizontal);
            let walk_y = self.is_walkable(p + vertical);
            if walk_y {
                dirs.push(vertical);
            }
            if walk_x {
                dirs.push(horizontal);
            }
            if (walk_x || walk_y) && self.is_walkable(p + d) {
                dirs.push(d);
            }
            // Forced neighbors.
            let back_x = Point::new(-d.x, d.y);
            if walk_y
                && !self.is_walkable(p + Point::new(-d.x, 0))
                && self.is_walkable(p + back_x)
            {
                dirs.push(back_x);
            }
            let back_y = Point::new(d.x, -d.y);
            if walk_x
                && !self.is_walkable(p + Point::new(0, -d.y))
                && self.is_walkable(p + back_y)
            {
                dirs.push(back_y);
            }
        } else if self.is_walkable(p + d) {
            dirs.push(d);
            // Forced neighbors on either side.
            let side = Point::new(d.y, d.x);
            for s in [side, -side] {
                if !self.is_walkable(p + s) && self.is_walkable(p + d + s) {
                    dirs.push(d + s);
                }
            }
        }
        dirs
    }

    /// Whether `p`, reached travelling in direction `d`, has a forced
    /// neighbor. Uses the same conditions as [`pruned_neighbors`](Self::pruned_neighbors).
    pub(crate) fn has_forced_neighbor(&self, p: Point, d: Point) -> bool {
        if d.is_diagonal() {
            (self.is_walkable(p + Point::new(0, d.y))
                && !self.is_walkable(p + Point::new(-d.x, 0))
                && self.is_walkable(p + Point::new(-d.x, d.y)))
                || (self.is_walkable(p + Point::new(d.x, 0))
                    && !self.is_walkable(p + Point::new(0, -d.y))
                    && self.is_walkable(p + Point::new(d.x, -d.y)))
        } else {
            if !self.is_walkable(p + d) {
                return false;
            }
            let side = Point::new(d.y, d.x);
            [side, -side]
                .into_iter()
                .any(|s| !self.is_walkable(p + s) && self.is_walkable(p + d + s))
        }
    }
}
