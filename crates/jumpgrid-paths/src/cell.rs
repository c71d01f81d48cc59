//! The [`Cell`] type: per-position search state.

use std::cmp::Ordering;

use jumpgrid_core::Point;

/// Search state of one grid position.
///
/// Cells live in the [`Grid`](crate::Grid) arena and are reused across
/// searches. Every field except the position is tagged with the generation
/// of the search that last wrote it; a cell from an older generation is
/// treated as untouched.
#[derive(Debug, Clone)]
pub struct Cell {
    pos: Point,
    pub(crate) g: i32,
    pub(crate) h: i32,
    /// Index of the predecessor cell in the grid arena.
    pub(crate) parent: Option<usize>,
    /// Slot in the open set heap, owned by [`OpenSet`](crate::OpenSet).
    pub(crate) heap_index: Option<usize>,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            g: 0,
            h: 0,
            parent: None,
            heap_index: None,
            generation: 0,
            closed: false,
        }
    }

    /// Grid position of the cell.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Accumulated cost from the start, as written by the last search that
    /// reached this cell.
    #[inline]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Heuristic estimate to the target, as written by the last search that
    /// reached this cell.
    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// Total estimated cost, `g + h`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }

    /// Frontier ordering: lower `f` first, ties broken by lower `h`.
    #[inline]
    pub fn rank(&self, other: &Cell) -> Ordering {
        self.f().cmp(&other.f()).then(self.h.cmp(&other.h))
    }

    /// Clear all search state.
    pub(crate) fn reset(&mut self) {
        self.g = 0;
        self.h = 0;
        self.parent = None;
        self.heap_index = None;
        self.generation = 0;
        self.closed = false;
    }

    /// Bring the cell into `generation`, discarding state left by an older
    /// search. Untouched cells start with an unbounded `g`.
    #[inline]
    pub(crate) fn touch(&mut self, generation: u32) {
        if self.generation == generation {
            return;
        }
        self.g = i32::MAX;
        self.h = 0;
        self.parent = None;
        self.heap_index = None;
        self.generation = generation;
        self.closed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(g: i32, h: i32) -> Cell {
        let mut c = Cell::new(Point::ZERO);
        c.g = g;
        c.h = h;
        c
    }

    #[test]
    fn f_is_sum_of_g_and_h() {
        let c = cell(24, 30);
        assert_eq!(c.f(), 54);
    }

    #[test]
    fn rank_prefers_lower_f_then_lower_h() {
        assert_eq!(cell(10, 10).rank(&cell(10, 20)), Ordering::Less);
        // Same f: the one closer to the target wins.
        assert_eq!(cell(20, 10).rank(&cell(10, 20)), Ordering::Less);
        assert_eq!(cell(10, 20).rank(&cell(20, 10)), Ordering::Greater);
        assert_eq!(cell(15, 15).rank(&cell(15, 15)), Ordering::Equal);
    }

    #[test]
    fn touch_discards_older_generation() {
        let mut c = cell(40, 12);
        c.parent = Some(3);
        c.closed = true;
        c.generation = 1;

        c.touch(1);
        assert_eq!(c.g(), 40);
        assert!(c.closed);

        c.touch(2);
        assert_eq!(c.g(), i32::MAX);
        assert_eq!(c.h(), 0);
        assert_eq!(c.parent, None);
        assert!(!c.closed);
        assert_eq!(c.generation, 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut c = cell(40, 12);
        c.parent = Some(1);
        c.heap_index = Some(0);
        c.generation = 9;
        c.reset();
        assert_eq!((c.g(), c.h(), c.parent, c.heap_index), (0, 0, None, None));
        assert_eq!(c.generation, 0);
    }
}
