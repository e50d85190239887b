//! Entry points used by the command-line front end.
//!
//! Each function runs one whole pipeline step and returns the encoded image
//! text, so callers can write the result in a single step and never leave a
//! partial file behind.

use rand::Rng;

use crate::generate::{generate_with_stats, CarveStats, GenerateError};
use crate::pgm::{self, DecodeError, Palette};
use crate::solve::{solve, Route, SolveError};
use std::fmt;

/// Generate a maze and encode it with the two-value palette.
pub fn generate_image<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<(String, CarveStats), GenerateError> {
    let (grid, stats) = generate_with_stats(width, height, rng)?;
    Ok((pgm::to_string(&grid, Palette::TwoTone), stats))
}

/// Failure of [`solve_image`]: either the input is not a maze image or the
/// maze has no route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveImageError {
    Decode(DecodeError),
    Solve(SolveError),
}

impl fmt::Display for SolveImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "{e}"),
            Self::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolveImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Solve(e) => Some(e),
        }
    }
}

impl From<DecodeError> for SolveImageError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<SolveError> for SolveImageError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

/// Decode a generated maze, solve it and encode the route with the
/// three-value palette.
pub fn solve_image(text: &str) -> Result<(String, Route), SolveImageError> {
    let mut grid = pgm::decode(text, Palette::TwoTone)?;
    let route = solve(&mut grid)?;
    Ok((pgm::to_string(&grid, Palette::ThreeTone), route))
}
