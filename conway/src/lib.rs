//! Conway's Game of Life on a finite toroidal grid.
//!
//! The population is a sparse set of alive coordinates. Each step only looks
//! at alive cells and the dead cells next to them, so the cost of a
//! generation follows the population, not the grid area.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod simulation;
pub mod stats;

pub use board::Board;
pub use config::{DEFAULT_ITERATIONS, LifeConfig};
pub use engine::{initialize, step};
pub use error::{LifeError, Result};
pub use grid::{Cell, DEFAULT_GRID_SIZE, GridSize, neighbors};
pub use patterns::{PATTERNS, Pattern, Shape};
pub use render::{Render, Renderer};
pub use simulation::Simulation;
pub use stats::{AliveHistory, CycleDetector, RunSummary};
