//! Text dump of a grid with an optional path overlay.

use std::collections::HashSet;

use jumpgrid_core::Point;

use crate::{Grid, Path};

impl Grid {
    /// Render the grid as text, highest row first.
    ///
    /// `S` marks `start`, `E` marks `target`, `*` marks the unit steps of
    /// `path`, `.` a walkable cell and `#` a blocked one. The output parses
    /// back with [`WalkMask::parse`](jumpgrid_core::WalkMask::parse).
    pub fn render(&self, start: Point, target: Point, path: Option<&Path>) -> String {
        let on_path: HashSet<Point> = path
            .map(|p| p.steps().into_iter().collect())
            .unwrap_or_default();
        let mut out = String::with_capacity(self.len() + self.height() as usize);
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if p == start {
                    'S'
                } else if p == target {
                    'E'
                } else if on_path.contains(&p) {
                    '*'
                } else if self.is_walkable(p) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathFinder;
    use jumpgrid_core::WalkMask;

    #[test]
    fn renders_walls_and_endpoints() {
        let g = Grid::new(&WalkMask::parse("..#\n...").unwrap()).unwrap();
        let s = g.render(Point::new(0, 0), Point::new(2, 0), None);
        assert_eq!(s, "..#\nS.E\n");
    }

    #[test]
    fn renders_path_and_parses_back() {
        let text = "
            .....
            ..#..
            ..#..
            ..#..
            ..#..
        ";
        let mask = WalkMask::parse(text).unwrap();
        let mut g = Grid::new(&mask).unwrap();
        let (s, t) = (Point::new(0, 0), Point::new(4, 0));
        let path = PathFinder::new().get_path(&mut g, s, t).unwrap();

        let out = g.render(s, t, Some(&path));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(&lines[0][2..3], "*");
        assert!(lines[4].starts_with('S'));
        assert!(lines[4].ends_with('E'));
        assert_eq!(out.matches('*').count(), path.steps().len() - 2);
        assert_eq!(WalkMask::parse(&out).unwrap(), mask);
    }
}
