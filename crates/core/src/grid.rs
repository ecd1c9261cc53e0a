//! Grid module - the tile map
//!
//! A fixed-size grid of wall/open cells stored as a flat row-major array.
//! Coordinates are `(x, y)` where `x` selects the map row (the line of the map
//! text) and `y` the character within that row. All lookups are bounds-checked.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::{Cell, Vec2f, Vec2i};

/// The map the game ships with: two rooms joined by a gap, plus a few pillars.
pub const BUILTIN_MAP: [&str; 20] = [
    "####################",
    "#......#...........#",
    "#......#...........#",
    "#......#...........#",
    "#......#.....#.....#",
    "#............#.....#",
    "#............#.....#",
    "##############.....#",
    "#..................#",
    "#..................#",
    "#..................#",
    "#............##....#",
    "#..................#",
    "#..................#",
    "#........##........#",
    "#........##........#",
    "#..................#",
    "#..................#",
    "#..................#",
    "####################",
];

/// Errors raised while building a grid or placing the player on it.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure while reading a map file.
    #[error("I/O error reading map: {0}")]
    Io(#[from] std::io::Error),

    /// No rows, or rows with no characters.
    #[error("map is empty")]
    Empty,

    /// Rows must all have the width of the first row.
    #[error("map row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The start position is outside the map or inside a wall.
    #[error("start position ({x}, {y}) is not an open cell")]
    StartBlocked { x: f32, y: f32 },
}

/// Fixed-size tile map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major (x * cols + y).
    cells: Vec<Cell>,
}

impl Grid {
    /// Build from fixed-width text rows. `#` is a wall; any other character is open.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let cols = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(MapError::Empty),
        };
        if cols == 0 {
            return Err(MapError::Empty);
        }

        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != cols {
                return Err(MapError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        Ok(Self::build(rows, cols))
    }

    /// Parse map text, one row per line. Trailing blank lines and `\r` are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self::from_rows(&lines)
    }

    /// Load a map file in the same format as [`Grid::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The built-in 20x20 map.
    pub fn builtin() -> Self {
        Self::build(&BUILTIN_MAP, BUILTIN_MAP[0].len())
    }

    /// A `rows x cols` room: wall border around an open interior.
    pub fn bordered(rows: usize, cols: usize) -> Self {
        let cells = (0..rows * cols)
            .map(|i| {
                let (x, y) = (i / cols, i % cols);
                if x == 0 || y == 0 || x + 1 == rows || y + 1 == cols {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();
        Self { rows, cols, cells }
    }

    fn build<S: AsRef<str>>(rows: &[S], cols: usize) -> Self {
        let mut cells = vec![Cell::Open; rows.len() * cols];
        for (x, line) in rows.iter().enumerate() {
            for (y, ch) in line.as_ref().chars().take(cols).enumerate() {
                cells[x * cols + y] = Cell::from_char(ch);
            }
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    #[inline(always)]
    fn index(&self, pos: Vec2i) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.rows || pos.y as usize >= self.cols {
            return None;
        }
        Some(pos.x as usize * self.cols + pos.y as usize)
    }

    /// Number of map rows (extent of `x`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of map columns (extent of `y`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` as a vector, matching the `(x, y)` coordinate order.
    pub fn size(&self) -> Vec2i {
        Vec2i::new(self.rows as i32, self.cols as i32)
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Vec2i) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set cell at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Vec2i, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and a wall.
    pub fn is_wall(&self, pos: Vec2i) -> bool {
        matches!(self.get(pos), Some(Cell::Wall))
    }

    /// In bounds and open.
    pub fn is_open(&self, pos: Vec2i) -> bool {
        matches!(self.get(pos), Some(Cell::Open))
    }

    /// True when the truncated cell under `point` is open.
    pub fn is_open_at(&self, point: Vec2f) -> bool {
        self.is_open(point.trunc())
    }

    /// Iterate cells of row `x`.
    pub fn row(&self, x: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = (x.min(self.rows)) * self.cols;
        let end = if x < self.rows { start + self.cols } else { start };
        self.cells[start..end].iter().copied()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.rows {
            for cell in self.row(x) {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
