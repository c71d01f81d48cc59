//! The [`WalkMask`] type: a boolean walkability matrix.
//!
//! A mask is the input the terrain layer hands to the path grid: one flag
//! per position, `true` meaning the position can be traversed. Masks can be
//! built programmatically or parsed from ASCII art.

use std::fmt;

use crate::geom::{Point, Range};

/// A row-major matrix of walkability flags covering `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkMask {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl WalkMask {
    /// Create a mask of the given size with every position set to `walkable`.
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32, walkable: bool) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![walkable; (width as usize) * (height as usize)],
        }
    }

    /// Create a mask by evaluating `f` at every position.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> bool) -> Self {
        let mut mask = Self::new(width, height, false);
        for p in mask.range() {
            let i = mask.index(p);
            mask.cells[i] = f(p);
        }
        mask
    }

    /// Parse a mask from ASCII art.
    ///
    /// `#` marks a blocked position; `.`, `S`, `E` and `*` mark walkable ones
    /// (the last three are accepted so that rendered maps parse back). Each line is
    /// trimmed and blank lines are skipped. The first line is the top row,
    /// i.e. the highest `y`.
    pub fn parse(s: &str) -> Result<Self, MaskError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count() as i32);

        let mut mask = Self::new(width, height, false);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(MaskError::InconsistentSize(s.to_string()));
            }
            let y = height - 1 - row as i32;
            for (x, ch) in line.chars().enumerate() {
                let walkable = match ch {
                    '.' | 'S' | 'E' | '*' => true,
                    '#' => false,
                    _ => {
                        return Err(MaskError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, row as i32),
                            content: s.to_string(),
                        });
                    }
                };
                let i = mask.index(Point::new(x as i32, y));
                mask.cells[i] = walkable;
            }
        }
        Ok(mask)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The range covered by the mask.
    #[inline]
    pub fn range(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Whether `p` is walkable. Positions outside the mask are not.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        self.range().contains(p) && self.cells[self.index(p)]
    }

    /// Set the walkability of `p`. No-op if `p` is outside the mask.
    pub fn set(&mut self, p: Point, walkable: bool) {
        if !self.range().contains(p) {
            return;
        }
        let i = self.index(p);
        self.cells[i] = walkable;
    }

    /// Number of walkable positions.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }
}

/// Errors that can occur when parsing a [`WalkMask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside `#`, `.`, `S`, `E`, `*` was found. `pos` is the
    /// column and line of the character in the text.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "mask: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "mask contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for MaskError {}
