//! Error types for the life engine.

use thiserror::Error;

/// Errors raised while setting up a simulation. Stepping itself cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A shape coordinate lies outside `[0, width) x [0, height)`.
    #[error("shape contains point ({x}, {y}) outside the {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Grid size of zero.
    #[error("grid size must be positive")]
    EmptyGrid,

    /// Shape name not found in the pattern library.
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),

    /// Random fill density outside `[0, 1]`, NaN included.
    #[error("density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, LifeError>;
