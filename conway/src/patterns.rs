// patterns.rs - Shape sources: named patterns and random fills

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Cell, GridSize, LifeError, Result};

/// Share of cells a random fill brings to life (~33%).
pub const DEFAULT_DENSITY: f64 = 1.0 / 3.0;

/// A named pattern, stored with its bounding box anchored at the origin.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    /// Lookup keys accepted by [`Pattern::find`], lowercase.
    pub aliases: &'static [&'static str],
    pub cells: &'static [(u32, u32)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    aliases: &["block"],
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    aliases: &["blinker"],
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    aliases: &["toad"],
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    aliases: &["beacon"],
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    aliases: &["glider"],
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    aliases: &["pulsar"],
    cells: &[
        // Top half
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        // Bottom half (mirrored)
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    aliases: &["r-pentomino", "rpentomino"],
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    aliases: &["gosper", "gosper glider gun", "gun"],
    cells: &[
        (0, 4), (1, 4), (0, 5), (1, 5),
        (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
        (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
        (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
        (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
        (34, 2), (34, 3), (35, 2), (35, 3),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    TOAD,
    BEACON,
    PULSAR,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
    BLOCK,
];

impl Pattern {
    /// Looks a pattern up by name or alias, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        let key = name.trim().to_lowercase();
        PATTERNS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&key) || p.aliases.contains(&key.as_str()))
    }

    /// Width and height of the bounding box.
    pub fn extent(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Cells placed in the middle of `grid`.
    ///
    /// A pattern larger than the grid is anchored at the origin and spills
    /// past the far edges, which initialization then reports as out of bounds.
    pub fn centered_on(&self, grid: GridSize) -> Vec<Cell> {
        let (w, h) = self.extent();
        let dx = grid.get().saturating_sub(w) / 2;
        let dy = grid.get().saturating_sub(h) / 2;
        self.cells.iter().map(|&(x, y)| Cell::new(x + dx, y + dy)).collect()
    }
}

/// Where generation 0 comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Pattern(&'static Pattern),
    /// Every cell independently alive with probability `density`.
    Random { density: f64, seed: Option<u64> },
}

impl Shape {
    pub const fn random() -> Self {
        Shape::Random { density: DEFAULT_DENSITY, seed: None }
    }

    /// A random fill, rejecting densities outside `[0, 1]`.
    pub fn random_with(density: f64, seed: Option<u64>) -> Result<Self> {
        check_density(density)?;
        Ok(Shape::Random { density, seed })
    }

    /// Replaces the seed of a random shape; named patterns are unaffected.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        match self {
            Shape::Random { density, .. } => Shape::Random { density, seed },
            other => other,
        }
    }

    /// Concrete coordinates for `grid`.
    pub fn cells(&self, grid: GridSize) -> Result<Vec<Cell>> {
        match *self {
            Shape::Pattern(pattern) => Ok(pattern.centered_on(grid)),
            Shape::Random { density, seed } => {
                check_density(density)?;
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_rng(&mut rand::rng()),
                };
                Ok(random_cells(&mut rng, grid, density))
            }
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::random()
    }
}

impl FromStr for Shape {
    type Err = LifeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(Shape::random());
        }
        Pattern::find(s)
            .map(Shape::Pattern)
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Pattern(pattern) => f.write_str(pattern.name),
            Shape::Random { density, .. } => write!(f, "Random ({:.0}%)", density * 100.0),
        }
    }
}

fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LifeError::InvalidDensity(density))
    }
}

fn random_cells<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, density: f64) -> Vec<Cell> {
    let n = grid.get();
    let mut cells = Vec::new();
    for y in 0..n {
        for x in 0..n {
            if rng.random_bool(density) {
                cells.push(Cell::new(x, y));
            }
        }
    }
    cells
}
