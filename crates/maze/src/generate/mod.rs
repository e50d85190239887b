//! Maze generation: randomized depth-first carving plus exit repair.
//!
//! Purpose
//! - Turn an all-wall grid into a maze whose start `(0, 0)` and exit
//!   `(width-1, height-1)` are connected by open cells.
//!
//! Model
//! - Walls and corridors are both whole cells (pixel mazes). A cell may be
//!   entered forward only on its first touch; after a dead end the carver
//!   switches to backtracking mode, where a cell touched exactly once may be
//!   re-entered. That second entry adds branches and occasional loops.
//! - If the frontier empties without reaching the exit, a straight tunnel is
//!   dug from the exit up or left until it meets a corridor.
//!
//! Randomness comes from a caller-supplied `Rng`; seeding a `StdRng` makes a
//! maze reproducible.

mod carve;

pub use carve::{carve, tunnel_to_exit, CarveStats};

use crate::grid::Grid;
use rand::Rng;
use std::fmt;

/// Error raised before any carving happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    InvalidDimensions { width: i64, height: i64 },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "invalid dimensions {width}x{height}: width and height must be positive"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Validate signed, user-supplied dimensions.
pub fn checked_dimensions(width: i64, height: i64) -> Result<(usize, usize), GenerateError> {
    let err = GenerateError::InvalidDimensions { width, height };
    if width <= 0 || height <= 0 {
        return Err(err);
    }
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(err),
    }
}

/// Generate a `width × height` maze.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    generate_with_stats(width, height, rng).map(|(grid, _)| grid)
}

/// Like [`generate`], also reporting carve statistics.
pub fn generate_with_stats<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<(Grid, CarveStats), GenerateError> {
    let mut grid = Grid::new(width, height).ok_or_else(|| GenerateError::InvalidDimensions {
        width: i64::try_from(width).unwrap_or(i64::MAX),
        height: i64::try_from(height).unwrap_or(i64::MAX),
    })?;
    let mut stats = carve(&mut grid, rng);
    stats.tunnelled = tunnel_to_exit(&mut grid, rng);
    tracing::debug!(
        width,
        height,
        pushes = stats.pushes,
        backtracks = stats.backtracks,
        tunnelled = stats.tunnelled,
        "maze generated"
    );
    Ok((grid, stats))
}

#[cfg(test)]
mod tests;
