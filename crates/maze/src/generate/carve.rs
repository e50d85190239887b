//! Depth-first carver with touch counting, and the straight exit tunnel.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Colour, Direction, Grid, Point};

/// Counters collected while carving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Forward moves, i.e. cells pushed onto the frontier after the start.
    pub pushes: usize,
    /// Frontier pops.
    pub backtracks: usize,
    /// Cells opened by the exit tunnel (0 when carving reached the exit).
    pub tunnelled: usize,
}

/// Carve corridors into `grid` starting at `(0, 0)`.
///
/// Expects a freshly built all-wall grid; touch counts and visited flags are
/// taken as they are.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> CarveStats {
    Carver::new(grid, rng).run()
}

/// Open a straight line from the exit toward the top or left edge if the
/// carver never reached the exit. Returns the number of cells opened.
///
/// The direction is drawn once. Digging stops at the first open cell or once
/// the line reaches row 0 or column 0, whichever comes first; cells on that
/// edge row or column are left untouched.
pub fn tunnel_to_exit<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let exit = grid.exit();
    if grid[exit].colour != Colour::Wall {
        return 0;
    }
    let dir = if rng.gen_bool(0.5) {
        Direction::Up
    } else {
        Direction::Left
    };
    let mut p = exit;
    let mut opened = 0;
    while p.x != 0 && p.y != 0 && grid[p].colour == Colour::Wall {
        grid[p].colour = Colour::Corridor;
        opened += 1;
        match grid.step(p, dir) {
            Some(next) => p = next,
            None => break,
        }
    }
    tracing::debug!(?dir, opened, "exit tunnel dug");
    opened
}

struct Carver<'a, R: ?Sized> {
    grid: &'a mut Grid,
    rng: &'a mut R,
    stack: Vec<Point>,
    candidates: Vec<Point>,
    backtracking: bool,
    stats: CarveStats,
}

impl<'a, R: Rng + ?Sized> Carver<'a, R> {
    fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        Self {
            grid,
            rng,
            stack: Vec::new(),
            candidates: Vec::with_capacity(4),
            backtracking: false,
            stats: CarveStats::default(),
        }
    }

    fn run(mut self) -> CarveStats {
        let start = self.grid.start();
        self.open(start);
        self.stack.push(start);

        while let Some(&cur) = self.stack.last() {
            self.open(cur);
            self.collect_candidates(cur);
            if let Some(&next) = self.candidates.choose(&mut *self.rng) {
                self.open(next);
                self.stack.push(next);
                self.backtracking = false;
                self.stats.pushes += 1;
            } else {
                self.stack.pop();
                self.backtracking = true;
                self.stats.backtracks += 1;
            }
        }
        self.stats
    }

    fn open(&mut self, p: Point) {
        let cell = &mut self.grid[p];
        cell.visited = true;
        cell.colour = Colour::Corridor;
    }

    /// Touch every in-bounds neighbour of `cur` and keep the eligible ones.
    ///
    /// The touch count is bumped for every neighbour, eligible or not; later
    /// backtracking decisions depend on the full count.
    fn collect_candidates(&mut self, cur: Point) {
        self.candidates.clear();
        for dir in Direction::CARVE_ORDER {
            let Some(n) = self.grid.step(cur, dir) else {
                continue;
            };
            let cell = &mut self.grid[n];
            let prior = cell.touches;
            cell.touches += 1;
            let eligible = if self.backtracking {
                prior == 1
            } else {
                prior == 0 && !cell.visited
            };
            if eligible {
                self.candidates.push(n);
            }
        }
    }
}
