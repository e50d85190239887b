//! Maze solving: depth-first search with dead-end memoization.
//!
//! Purpose
//! - Find one route of open cells from `(0, 0)` to `(width-1, height-1)` and
//!   colour it `Path` in place.
//!
//! Model
//! - The frontier stack is the tentative route. Neighbours are tried right,
//!   down, left, up; the first open, non-dead-end one is pushed. A cell with
//!   no such neighbour is flagged dead end, restored to `Corridor` and popped.
//! - A dead-end cell is never entered again, so each cell is pushed at most
//!   once per incident neighbour and the search is linear in the grid size.

mod dfs;

pub use dfs::{solve, Route};

use crate::grid::Point;
use std::fmt;

/// Reasons a maze has no route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Start or exit cell is a wall; no search was attempted.
    BlockedEndpoint(Point),
    /// Every branch from the start ended in a dead end.
    NoPathFound,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockedEndpoint(p) => {
                write!(f, "invalid maze: endpoint ({}, {}) is a wall", p.x, p.y)
            }
            Self::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for SolveError {}
