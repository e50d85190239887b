//! Stack-based depth-first search over corridor cells.

use crate::grid::{Colour, Direction, Grid, Point};

use super::SolveError;

/// A solved route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Route cells from start to exit, inclusive.
    pub cells: Vec<Point>,
    /// Cells proven not to lead to the exit during the search.
    pub dead_ends: usize,
}

impl Route {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Solve `grid` in place, colouring the route `Path`.
///
/// On error the grid may carry dead-end flags from the partial search and
/// should be discarded.
pub fn solve(grid: &mut Grid) -> Result<Route, SolveError> {
    for p in [grid.start(), grid.exit()] {
        if !grid[p].colour.is_open() {
            return Err(SolveError::BlockedEndpoint(p));
        }
    }
    Searcher::new(grid).run()
}

struct Searcher<'a> {
    grid: &'a mut Grid,
    stack: Vec<Point>,
    dead_ends: usize,
}

impl<'a> Searcher<'a> {
    fn new(grid: &'a mut Grid) -> Self {
        Self {
            grid,
            stack: Vec::new(),
            dead_ends: 0,
        }
    }

    fn run(mut self) -> Result<Route, SolveError> {
        let exit = self.grid.exit();
        self.stack.push(self.grid.start());

        while let Some(&cur) = self.stack.last() {
            if cur == exit {
                self.grid[cur].colour = Colour::Path;
                tracing::debug!(
                    length = self.stack.len(),
                    dead_ends = self.dead_ends,
                    "route found"
                );
                return Ok(Route {
                    cells: self.stack,
                    dead_ends: self.dead_ends,
                });
            }
            match self.next_step(cur) {
                Some(next) => {
                    self.grid[cur].colour = Colour::Path;
                    self.stack.push(next);
                }
                None => {
                    let cell = &mut self.grid[cur];
                    cell.colour = Colour::Corridor;
                    cell.dead_end = true;
                    self.dead_ends += 1;
                    self.stack.pop();
                }
            }
        }
        tracing::debug!(dead_ends = self.dead_ends, "frontier exhausted");
        Err(SolveError::NoPathFound)
    }

    /// First neighbour in solve order that is an unexplored corridor.
    fn next_step(&self, cur: Point) -> Option<Point> {
        self.grid
            .neighbours(cur, &Direction::SOLVE_ORDER)
            .find(|&n| {
                let cell = &self.grid[n];
                cell.colour == Colour::Corridor && !cell.dead_end
            })
    }
}
