//! Cell-level types shared by the generator, the solver and the codec.

/// Grid coordinate; `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True when `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

/// Axis-aligned step between neighbouring cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Order in which the carver collects candidates.
    pub const CARVE_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Order in which the solver tries neighbours. Right and down first since
    /// the exit sits in the bottom-right corner.
    pub const SOLVE_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
}

/// Pixel colour of a cell. Discriminants are the greyscale values written to
/// the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Colour {
    Wall = 0,
    Path = 1,
    Corridor = 2,
}

impl Colour {
    #[inline]
    pub fn pixel(self) -> u8 {
        self as u8
    }

    pub fn from_pixel(value: u8) -> Option<Self> {
        match value {
            0 => Some(Colour::Wall),
            1 => Some(Colour::Path),
            2 => Some(Colour::Corridor),
            _ => None,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self != Colour::Wall
    }
}

/// One grid position. The generator uses `visited`/`touches`, the solver
/// uses `dead_end`; both use `colour`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub visited: bool,
    /// How many times a neighbouring carve step has examined this cell.
    pub touches: u32,
    pub colour: Colour,
    pub dead_end: bool,
}

impl Cell {
    pub const fn with_colour(colour: Colour) -> Self {
        Self {
            visited: false,
            touches: 0,
            colour,
            dead_end: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::with_colour(Colour::Wall)
    }
}
