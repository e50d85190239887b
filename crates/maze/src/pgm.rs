//! Plain-text greyscale image codec (PGM, magic `P2`).
//!
//! Purpose
//! - Serialize a `Grid` as an image with a one-pixel wall border and read such
//!   images back. The border is open directly above the start and directly
//!   below the exit.
//!
//! Format
//! - Header `P2`, image width and height (interior plus 2), max value `2`.
//! - Pixels are `0` (wall), `1` (path) and `2` (corridor), one row per line.
//! - Generated mazes use the two-value palette; solved mazes add `1`.

use std::fmt;
use std::io::{self, Write};

use crate::grid::{Colour, Grid};

pub const MAGIC: &str = "P2";
pub const MAX_VALUE: u32 = 2;

/// Allowed pixel values for a given image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Wall and corridor only; generator output and solver input.
    TwoTone,
    /// Wall, path and corridor; solver output.
    ThreeTone,
}

impl Palette {
    pub fn admits(self, colour: Colour) -> bool {
        match self {
            Palette::TwoTone => colour != Colour::Path,
            Palette::ThreeTone => true,
        }
    }

    /// Colour of the border openings at the entrance and exit.
    pub fn opening(self) -> Colour {
        match self {
            Palette::TwoTone => Colour::Corridor,
            Palette::ThreeTone => Colour::Path,
        }
    }
}

/// Decoding failures. All of them mean the input is not a maze image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    BadMagic(String),
    BadHeader { field: &'static str, reason: String },
    BadDimensions { width: usize, height: usize },
    BadMaxValue(u32),
    BadPixel { x: usize, y: usize, value: String },
    Truncated { expected: usize, found: usize },
    TrailingData,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid image format: ")?;
        match self {
            Self::BadMagic(m) => write!(f, "expected magic {MAGIC}, found {m:?}"),
            Self::BadHeader { field, reason } => write!(f, "bad {field}: {reason}"),
            Self::BadDimensions { width, height } => write!(
                f,
                "image is {width}x{height}, need at least 3x3 including the border"
            ),
            Self::BadMaxValue(v) => write!(f, "max value {v}, expected {MAX_VALUE}"),
            Self::BadPixel { x, y, value } => {
                write!(f, "pixel {value:?} at ({x}, {y}) is outside the palette")
            }
            Self::Truncated { expected, found } => {
                write!(f, "expected {expected} pixels, found {found}")
            }
            Self::TrailingData => write!(f, "trailing data after the last pixel"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Write `grid` as a bordered image.
pub fn encode<W: Write>(grid: &Grid, palette: Palette, out: &mut W) -> io::Result<()> {
    let width = grid.width();
    let open = palette.opening().pixel();
    let wall = Colour::Wall.pixel();

    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{} {}", width + 2, grid.height() + 2)?;
    writeln!(out, "{MAX_VALUE}")?;

    let mut line: Vec<u8> = Vec::with_capacity(width + 2);
    // top border, open above (0, 0)
    line.push(wall);
    line.push(open);
    line.resize(width + 2, wall);
    write_row(out, &line)?;

    for row in grid.rows() {
        line.clear();
        line.push(wall);
        line.extend(row.iter().map(|c| c.colour.pixel()));
        line.push(wall);
        write_row(out, &line)?;
    }

    // bottom border, open below the exit
    line.clear();
    line.resize(width + 2, wall);
    line[width] = open;
    write_row(out, &line)
}

/// Encode into an in-memory string.
pub fn to_string(grid: &Grid, palette: Palette) -> String {
    let mut buf = Vec::new();
    encode(grid, palette, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("encoder only emits ASCII")
}

fn write_row<W: Write>(out: &mut W, pixels: &[u8]) -> io::Result<()> {
    let mut first = true;
    for p in pixels {
        if first {
            first = false;
        } else {
            out.write_all(b" ")?;
        }
        write!(out, "{p}")?;
    }
    out.write_all(b"\n")
}

/// Parse a bordered image into a grid. The border is checked against the
/// palette but otherwise dropped.
pub fn decode(text: &str, palette: Palette) -> Result<Grid, DecodeError> {
    let mut tokens = Tokens::new(text);

    let magic = tokens.next().unwrap_or_default();
    if magic != MAGIC {
        return Err(DecodeError::BadMagic(magic.to_string()));
    }
    let img_width: usize = tokens.header("width")?;
    let img_height: usize = tokens.header("height")?;
    if img_width < 3 || img_height < 3 {
        return Err(DecodeError::BadDimensions {
            width: img_width,
            height: img_height,
        });
    }
    let max_value: u32 = tokens.header("max value")?;
    if max_value != MAX_VALUE {
        return Err(DecodeError::BadMaxValue(max_value));
    }

    let expected = img_width
        .checked_mul(img_height)
        .ok_or(DecodeError::BadDimensions {
            width: img_width,
            height: img_height,
        })?;
    // Sizes come from the header; buffers grow only as pixels actually arrive.
    let mut rows = Vec::new();
    let mut found = 0;
    for y in 0..img_height {
        let mut row = Vec::new();
        for x in 0..img_width {
            let tok = tokens
                .next()
                .ok_or(DecodeError::Truncated { expected, found })?;
            found += 1;
            let colour = tok
                .parse::<u8>()
                .ok()
                .and_then(Colour::from_pixel)
                .filter(|&c| palette.admits(c))
                .ok_or_else(|| DecodeError::BadPixel {
                    x,
                    y,
                    value: tok.to_string(),
                })?;
            let interior = (1..img_width - 1).contains(&x) && (1..img_height - 1).contains(&y);
            if interior {
                row.push(colour);
            }
        }
        if (1..img_height - 1).contains(&y) {
            rows.push(row);
        }
    }
    if tokens.next().is_some() {
        return Err(DecodeError::TrailingData);
    }

    Grid::from_rows(rows).ok_or(DecodeError::BadDimensions {
        width: img_width,
        height: img_height,
    })
}

/// Whitespace-separated tokens with `#` comments stripped.
struct Tokens<'a> {
    inner: std::iter::Flatten<std::vec::IntoIter<std::str::SplitAsciiWhitespace<'a>>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let lines: Vec<_> = text
            .lines()
            .map(|l| match l.find('#') {
                Some(i) => &l[..i],
                None => l,
            })
            .map(str::split_ascii_whitespace)
            .collect();
        Self {
            inner: lines.into_iter().flatten(),
        }
    }

    fn header<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T, DecodeError> {
        let tok = self.next().ok_or(DecodeError::BadHeader {
            field,
            reason: "missing".to_string(),
        })?;
        tok.parse().map_err(|_| DecodeError::BadHeader {
            field,
            reason: format!("{tok:?} is not a number"),
        })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next()
    }
}
