// grid.rs - Grid types for Conway's Game of Life on a torus

use std::fmt;

use crate::{LifeError, Result};

/// Default edge length of the playing area (50x50).
pub const DEFAULT_GRID_SIZE: u32 = 50;

/// Moore neighbourhood offsets, row by row, centre excluded.
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A grid position. Identity is purely positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Edge length N of an N x N toroidal grid. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize(u32);

impl GridSize {
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }
        Ok(Self(size))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of cells on the grid.
    pub const fn area(self) -> u64 {
        self.0 as u64 * self.0 as u64
    }

    pub const fn contains(self, cell: Cell) -> bool {
        cell.x < self.0 && cell.y < self.0
    }

    /// Reduces a signed coordinate onto the torus.
    fn wrap(self, coord: i64) -> u32 {
        // rem_euclid keeps (0 - 1) mod N at N - 1 instead of -1
        coord.rem_euclid(i64::from(self.0)) as u32
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// The 8 toroidal neighbours of `cell`.
///
/// Each axis wraps independently, so a cell on an edge sees the cells on the
/// opposite edge. On grids of size 1 or 2 some of the returned coordinates
/// coincide and may equal `cell` itself; no attempt is made to hide that.
pub fn neighbors(cell: Cell, grid: GridSize) -> [Cell; 8] {
    let (x, y) = (i64::from(cell.x), i64::from(cell.y));
    OFFSETS.map(|(dx, dy)| Cell::new(grid.wrap(x + dx), grid.wrap(y + dy)))
}
