use jumpgrid_core::Point;

/// Cost of one horizontal or vertical step.
pub const ORTHOGONAL_COST: i32 = 10;

/// Cost of one diagonal step (√2 scaled by 10, rounded down).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points with integer step weights.
///
/// This is the exact cost of the cheapest 8-directional walk between `a`
/// and `b` on an open grid, and the heuristic used by the search.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + ORTHOGONAL_COST * (hi - lo)
}
