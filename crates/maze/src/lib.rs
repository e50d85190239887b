//! Pixel mazes: carving, solving and the greyscale image format.
//!
//! A maze is a `Grid` of whole-cell walls and corridors. `generate` carves one
//! from an all-wall grid, `solve` marks a route from the top-left to the
//! bottom-right cell, and `pgm` reads and writes the bordered image form.
//!
//! Both algorithms are single-threaded and own their grid for the duration
//! of one call. Randomness is always passed in by the caller.

pub mod api;
pub mod generate;
pub mod grid;
pub mod pgm;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use generate::{checked_dimensions, generate, GenerateError};
pub use grid::{Cell, Colour, Direction, Grid, Point};
pub use solve::{solve, Route, SolveError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::generate::{generate, generate_with_stats, CarveStats};
    pub use crate::grid::{Colour, Grid, Point};
    pub use crate::pgm::{decode, encode, Palette};
    pub use crate::solve::{solve, Route};
}
