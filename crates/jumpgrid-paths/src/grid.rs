use std::fmt;

use jumpgrid_core::{Point, Range, WalkMask};

use crate::cell::Cell;

/// The search grid: a cell arena plus a walkability mask.
///
/// A `Grid` is built from a [`WalkMask`] and owns one [`Cell`] per position.
/// Cells are allocated once per dimensions and reused by every search run
/// against the grid. Each search bumps the grid's generation, which lazily
/// invalidates whatever an earlier search left in the cells.
///
/// The grid must not be re-initialized while a search borrows it; the
/// borrow checker enforces this since [`PathFinder::get_path`] takes
/// `&mut Grid`.
///
/// [`PathFinder::get_path`]: crate::PathFinder::get_path
#[derive(Debug, Clone)]
pub struct Grid {
    rng: Range,
    width: usize,
    cells: Vec<Cell>,
    walkable: Vec<bool>,
    generation: u32,
}

impl Grid {
    /// Build a grid covering `mask`.
    pub fn new(mask: &WalkMask) -> Result<Self, GridError> {
        let mut grid = Self {
            rng: Range::default(),
            width: 0,
            cells: Vec::new(),
            walkable: Vec::new(),
            generation: 0,
        };
        grid.initialize(mask.width(), mask.height(), mask)?;
        Ok(grid)
    }

    /// Load a new walkability mask.
    ///
    /// The cell arena is reallocated only if `width`/`height` differ from the
    /// current dimensions; otherwise every cell is reset in place. Either way
    /// no state from earlier searches survives. On error the grid is left
    /// unchanged.
    pub fn initialize(
        &mut self,
        width: i32,
        height: i32,
        mask: &WalkMask,
    ) -> Result<(), GridError> {
        if width <= 0 || height <= 0 {
            log::warn!("rejecting grid dimensions {width}x{height}");
            return Err(GridError::InvalidDimensions { width, height });
        }
        let expected = Point::new(width, height);
        if mask.size() != expected {
            log::warn!("rejecting {} mask for a {expected} grid", mask.size());
            return Err(GridError::MaskMismatch {
                expected,
                found: mask.size(),
            });
        }

        let rng = Range::with_size(width, height);
        if rng.size() == self.rng.size() {
            log::debug!("grid {width}x{height}: resetting cells in place");
            for cell in self.cells.iter_mut() {
                cell.reset();
            }
        } else {
            log::debug!("grid {width}x{height}: allocating {} cells", rng.len());
            self.cells = rng.iter().map(Cell::new).collect();
            self.walkable = vec![false; rng.len()];
        }
        self.rng = rng;
        self.width = width as usize;
        self.generation = 0;

        for p in rng {
            let i = self.index(p);
            self.walkable[i] = mask.get(p);
        }
        Ok(())
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// Size as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.rng.size()
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walkable[i])
    }

    /// The cell at `p`, or `None` if `p` is off-grid or unwalkable.
    pub fn cell_at(&self, p: Point) -> Option<&Cell> {
        let i = self.idx(p)?;
        self.walkable[i].then(|| &self.cells[i])
    }

    /// The cell nearest to `p`, clamping each coordinate into the grid.
    ///
    /// Walkability is not considered.
    pub fn clamp_to_grid(&self, p: Point) -> &Cell {
        let q = p.clamp(self.rng);
        &self.cells[self.index(q)]
    }

    /// Predecessor of `p` on the best path found by the current search, if
    /// `p` was reached by it and is not the start.
    pub fn parent_of(&self, p: Point) -> Option<Point> {
        let cell = &self.cells[self.idx(p)?];
        if cell.generation != self.generation || self.generation == 0 {
            return None;
        }
        cell.parent.map(|i| self.point(i))
    }

    /// Snapshot of the walkability as a mask.
    pub fn mask(&self) -> WalkMask {
        WalkMask::from_fn(self.width(), self.height(), |p| self.is_walkable(p))
    }

    // -----------------------------------------------------------------------
    // Arena access for the search
    // -----------------------------------------------------------------------

    /// Start a new search and return its generation.
    pub(crate) fn begin_search(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old tags could collide with new ones.
            for cell in self.cells.iter_mut() {
                cell.reset();
            }
            self.generation = 1;
        }
        self.generation
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Cell `i`, brought into the current generation.
    #[inline]
    pub(crate) fn touch(&mut self, i: usize) -> &mut Cell {
        let generation = self.generation;
        let cell = &mut self.cells[i];
        cell.touch(generation);
        cell
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(self.index(p))
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * self.width + (p.x as usize)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.mask().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mask = WalkMask::deserialize(deserializer)?;
        Grid::new(&mask).map_err(serde::de::Error::custom)
    }
}

/// Errors returned by [`Grid::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// The mask does not have the declared dimensions.
    MaskMismatch { expected: Point, found: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::MaskMismatch { expected, found } => {
                write!(
                    f,
                    "walkability mask is {}x{}, grid is {}x{}",
                    found.x, found.y, expected.x, expected.y
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
