// config.rs - Run parameters shared by every driver

use crate::{GridSize, Result};

/// Default number of generations computed after generation 0.
pub const DEFAULT_ITERATIONS: u64 = 100;

/// Immutable parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub grid_size: GridSize,
    pub iterations: u64,
}

impl LifeConfig {
    pub fn new(grid_size: u32, iterations: u64) -> Result<Self> {
        Ok(Self { grid_size: GridSize::new(grid_size)?, iterations })
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self { grid_size: GridSize::default(), iterations: DEFAULT_ITERATIONS }
    }
}
