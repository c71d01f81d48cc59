//! Jump Point Search shortest paths on binary walkability grids.
//!
//! The crate is built around three pieces:
//!
//! - [`Grid`] owns one [`Cell`] of search state per position together with
//!   the walkability mask, and implements the neighbor rules
//!   ([`Grid::all_neighbors`], [`Grid::pruned_neighbors`]).
//! - [`OpenSet`] is the search frontier, a binary heap with decrease-key.
//! - [`PathFinder`] runs the best-first search, jumping between jump points
//!   when configured with [`NeighborMode::Pruned`] (the default) and
//!   stepping cell by cell with [`NeighborMode::All`].
//!
//! Costs use integer octile weights: 10 per straight step and 14 per
//! diagonal step ([`octile`]).
//!
//! ```
//! use jumpgrid_core::{Point, WalkMask};
//! use jumpgrid_paths::{Grid, PathFinder};
//!
//! let mask = WalkMask::parse(
//!     "
//!     .....
//!     ..#..
//!     ..#..
//!     ",
//! )
//! .unwrap();
//! let mut grid = Grid::new(&mask).unwrap();
//! let mut finder = PathFinder::new();
//! let path = finder
//!     .get_path(&mut grid, Point::new(0, 0), Point::new(4, 0))
//!     .unwrap();
//! assert_eq!(path.start(), Point::new(0, 0));
//! assert_eq!(path.target(), Point::new(4, 0));
//! ```

mod cell;
mod config;
mod distance;
mod grid;
mod jps;
mod neighbors;
mod open_set;
mod pathfinder;
mod render;

pub use cell::Cell;
pub use config::{NeighborMode, SearchConfig};
pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, octile};
pub use grid::{Grid, GridError};
pub use neighbors::DIRECTIONS;
pub use open_set::OpenSet;
pub use pathfinder::{Path, PathFinder, SearchStats};
