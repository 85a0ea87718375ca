//! Validated grid coordinates shared by cells and sub-boards

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which axis a coordinate was given for (used in error messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// A row or column index in `0..=2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Coord(u8);

impl Coord {
    pub const ALL: [Coord; 3] = [Coord(0), Coord(1), Coord(2)];

    /// Validate a raw index for the given axis
    pub fn new(value: usize, axis: Axis) -> Result<Self, crate::Error> {
        if value < 3 {
            Ok(Coord(value as u8))
        } else {
            Err(crate::Error::InvalidCoordinate { axis, value })
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Coord> for u8 {
    fn from(coord: Coord) -> Self {
        coord.0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `(row, col)` position on a 3x3 grid.
///
/// The same type addresses a cell inside a sub-board and a sub-board inside
/// the meta-board; playing cell `(r, c)` sends the opponent to sub-board
/// `(r, c)`, so the two are interchangeable by design of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridPos")]
pub struct GridPos {
    pub row: Coord,
    pub col: Coord,
}

/// Unvalidated wire form of [`GridPos`]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGridPos {
    row: usize,
    col: usize,
}

impl TryFrom<RawGridPos> for GridPos {
    type Error = crate::Error;

    fn try_from(raw: RawGridPos) -> Result<Self, Self::Error> {
        GridPos::new(raw.row, raw.col)
    }
}

/// Coordinates of a sub-board within the meta-board
pub type SubBoardId = GridPos;

impl GridPos {
    /// Validate a raw `(row, col)` pair
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        Ok(GridPos {
            row: Coord::new(row, Axis::Row)?,
            col: Coord::new(col, Axis::Column)?,
        })
    }

    /// Row-major index in `0..9`
    pub fn index(self) -> usize {
        self.row.index() * 3 + self.col.index()
    }

    /// Inverse of [`GridPos::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 9 {
            return None;
        }
        Some(GridPos {
            row: Coord((index / 3) as u8),
            col: Coord((index % 3) as u8),
        })
    }

    /// All nine positions in row-major order
    pub fn all() -> impl Iterator<Item = GridPos> {
        (0..9).filter_map(GridPos::from_index)
    }

    /// Pick a uniformly random position
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GridPos {
            row: Coord(rng.random_range(0..3)),
            col: Coord(rng.random_range(0..3)),
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Parses `"r,c"` (whitespace around the parts is ignored).
impl FromStr for GridPos {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| crate::Error::InvalidMoveToken {
            token: s.to_string(),
            reason: reason.to_string(),
        };

        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected 'row,col'"))?;
        let row: usize = row
            .trim()
            .parse()
            .map_err(|_| invalid("row is not a number"))?;
        let col: usize = col
            .trim()
            .parse()
            .map_err(|_| invalid("column is not a number"))?;
        GridPos::new(row, col)
    }
}
