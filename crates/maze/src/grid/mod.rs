//! Rectangular cell grid shared by carving and solving.
//!
//! Purpose
//! - Own every cell of a maze in one row-major buffer and hand out access by
//!   `Point`, never by long-lived references. Both pipelines keep their
//!   frontier as a stack of points and re-read the top on every step.
//!
//! Layout
//! - `(0, 0)` is the start (top-left), `(width-1, height-1)` the exit.
//! - Width and height are at least 1; `Grid::new` refuses empty grids.

mod types;

pub use types::{Cell, Colour, Direction, Point};

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-wall grid. Returns `None` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        Self::filled(width, height, Colour::Wall)
    }

    /// Grid with every cell set to `colour`.
    pub fn filled(width: usize, height: usize, colour: Colour) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let len = width.checked_mul(height)?;
        Some(Self {
            width,
            height,
            cells: vec![Cell::with_colour(colour); len],
        })
    }

    /// Build a grid from rows of colours. Rows must be non-empty and of equal
    /// length.
    pub fn from_rows<I, R>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Colour>,
    {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for row in rows {
            let before = cells.len();
            cells.extend(row.into_iter().map(Cell::with_colour));
            let row_len = cells.len() - before;
            match width {
                None => width = Some(row_len),
                Some(w) if w != row_len => return None,
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.filter(|&w| w > 0)?;
        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(0, 0)
    }

    #[inline]
    pub fn exit(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Neighbour of `p` one step in `dir`, if it lies inside the grid.
    pub fn step(&self, p: Point, dir: Direction) -> Option<Point> {
        let next = match dir {
            Direction::Left => Point::new(p.x.checked_sub(1)?, p.y),
            Direction::Up => Point::new(p.x, p.y.checked_sub(1)?),
            Direction::Right => Point::new(p.x + 1, p.y),
            Direction::Down => Point::new(p.x, p.y + 1),
        };
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbours of `p`, visited in `order`.
    pub fn neighbours<'a>(
        &'a self,
        p: Point,
        order: &'a [Direction],
    ) -> impl Iterator<Item = Point> + 'a {
        order.iter().filter_map(move |&d| self.step(p, d))
    }

    /// Rows of cells from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn count(&self, colour: Colour) -> usize {
        self.cells.iter().filter(|c| c.colour == colour).count()
    }

    /// Points of all cells coloured `colour`, in row-major order.
    pub fn points_with(&self, colour: Colour) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.colour == colour)
            .map(|(i, _)| Point::new(i % self.width, i / self.width))
            .collect()
    }

    #[inline]
    fn offset(&self, p: Point) -> usize {
        assert!(
            self.contains(p),
            "point {p:?} outside {}x{} grid",
            self.width,
            self.height
        );
        p.y * self.width + p.x
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    fn index(&self, p: Point) -> &Cell {
        &self.cells[self.offset(p)]
    }
}

impl IndexMut<Point> for Grid {
    fn index_mut(&mut self, p: Point) -> &mut Cell {
        let i = self.offset(p);
        &mut self.cells[i]
    }
}
