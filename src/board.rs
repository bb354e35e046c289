use rand::{seq::SliceRandom, Rng};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::score::Scorer;

pub const DIM: usize = 3;
pub const CELLS: usize = DIM * DIM;

/// Tile value used for the blank square.
pub const BLANK: i32 = 0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 9 tiles, found {0}")]
    WrongLength(usize),
    #[error("tile {index} is {found:?}, not a digit")]
    NotADigit { index: usize, found: char },
    #[error("tile {index} is {value}, tiles must be 0-8")]
    OutOfRange { index: usize, value: u32 },
    #[error("tile {0} appears more than once")]
    Duplicate(i32),
}

/// A 3x3 sliding tile board stored row-major (`x + y * 3`), with a cached
/// ordering key `h`.
///
/// Grids compare and order by `h` alone. Two grids with different tiles but
/// the same score are equal as far as `Ord` is concerned; use [`TileGrid::tiles`]
/// to compare contents.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: [i32; CELLS],
    h: i32,
}

impl TileGrid {
    pub fn new(tiles: [i32; CELLS], scorer: &impl Scorer) -> Self {
        let h = scorer.score(&tiles);
        Self { tiles, h }
    }

    /// Builds a grid whose ordering key has not been computed yet. It sorts
    /// after every scored grid.
    pub fn unscored(tiles: [i32; CELLS]) -> Self {
        Self { tiles, h: i32::MAX }
    }

    /// A uniformly random arrangement of `0..=8`. Not necessarily solvable.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, scorer: &impl Scorer) -> Self {
        let mut tiles: [i32; CELLS] = std::array::from_fn(|i| i as i32);
        tiles.shuffle(rng);
        Self::new(tiles, scorer)
    }

    pub fn h(&self) -> i32 {
        self.h
    }

    pub fn tiles(&self) -> &[i32; CELLS] {
        &self.tiles
    }

    pub fn rescore(&mut self, scorer: &impl Scorer) {
        self.h = scorer.score(&self.tiles);
    }

    fn index(x: isize, y: isize) -> Option<usize> {
        let dim = DIM as isize;
        if (0..dim).contains(&x) && (0..dim).contains(&y) {
            Some((x + y * dim) as usize)
        } else {
            None
        }
    }

    pub fn try_get(&self, x: isize, y: isize) -> Option<i32> {
        Self::index(x, y).map(|i| self.tiles[i])
    }

    /// The tile at `(x, y)`, or `-1` if the coordinate is off the board.
    pub fn get(&self, x: isize, y: isize) -> i32 {
        self.try_get(x, y).unwrap_or(-1)
    }

    pub fn set(&mut self, x: isize, y: isize, value: i32) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.tiles[i] = value;
                true
            }
            None => false,
        }
    }

    /// Coordinates of the blank tile, if the board has one.
    pub fn blank_position(&self) -> Option<(isize, isize)> {
        let i = self.tiles.iter().position(|&t| t == BLANK)?;
        Some(((i % DIM) as isize, (i / DIM) as isize))
    }

    pub fn is_goal(&self, goal: &[i32; CELLS]) -> bool {
        &self.tiles == goal
    }

    /// Writes the boxed layout, formatting each tile with `cell`.
    pub fn write_boxed<W, F>(&self, out: &mut W, mut cell: F) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        F: FnMut(i32) -> String,
    {
        writeln!(out, "+-----+")?;
        for row in self.tiles.chunks(DIM) {
            for &val in row {
                write!(out, "|{}", cell(val))?;
            }
            writeln!(out, "|")?;
        }
        write!(out, "+-----+")
    }

    /// Exchanges two tiles. Returns `false` and leaves the board alone if
    /// either coordinate is off the board. The cached score is not updated.
    pub fn swap(&mut self, x1: isize, y1: isize, x2: isize, y2: isize) -> bool {
        match (Self::index(x1, y1), Self::index(x2, y2)) {
            (Some(i), Some(j)) => {
                self.tiles.swap(i, j);
                true
            }
            _ => false,
        }
    }
}

impl PartialEq for TileGrid {
    fn eq(&self, other: &Self) -> bool {
        self.h == other.h
    }
}

impl Eq for TileGrid {}

impl PartialOrd for TileGrid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TileGrid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.h.cmp(&other.h)
    }
}

impl FromStr for TileGrid {
    type Err = BoardError;

    /// Reads tiles left to right, top to bottom, one digit each: `"123456780"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != CELLS {
            return Err(BoardError::WrongLength(count));
        }

        let mut tiles = [BLANK; CELLS];
        let mut seen = [false; CELLS];
        for (index, c) in s.chars().enumerate() {
            let value = c
                .to_digit(10)
                .ok_or(BoardError::NotADigit { index, found: c })?;
            if value as usize >= CELLS {
                return Err(BoardError::OutOfRange { index, value });
            }
            if seen[value as usize] {
                return Err(BoardError::Duplicate(value as i32));
            }
            seen[value as usize] = true;
            tiles[index] = value as i32;
        }

        Ok(Self::unscored(tiles))
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_boxed(f, |tile| tile.to_string())
    }
}
