// stats.rs - Per-run population history, cycle detection and the final report

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use crate::{Board, GridSize};

/// How many recent board fingerprints the cycle detector remembers.
pub const CYCLE_WINDOW: usize = 10;

/// Alive-cell count of every generation so far, generation 0 first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliveHistory {
    counts: Vec<usize>,
}

impl AliveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, board: &Board) {
        self.counts.push(board.population());
    }

    /// Number of generations recorded.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Sum of alive cells over all recorded generations.
    pub fn total_alive(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Sum of dead cells over all recorded generations.
    pub fn total_dead(&self, grid: GridSize) -> u64 {
        (self.len() as u64).saturating_mul(grid.area()).saturating_sub(self.total_alive())
    }

    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Flags a board that repeats one of the last [`CYCLE_WINDOW`] boards.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    recent: VecDeque<u64>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self { recent: VecDeque::with_capacity(CYCLE_WINDOW) }
    }

    /// Returns true if `board` was seen recently; otherwise remembers it.
    pub fn observe(&mut self, board: &Board) -> bool {
        let hash = board.fingerprint();
        if self.recent.contains(&hash) {
            return true;
        }
        if self.recent.len() == CYCLE_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(hash);
        false
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

/// Totals reported once a run is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub grid: GridSize,
    /// Generations recorded, generation 0 included.
    pub generations: usize,
    pub total_alive: u64,
    pub total_dead: u64,
    pub peak_population: usize,
    pub final_population: usize,
    /// Generation at which a repeating board was first seen.
    pub cycle_at: Option<u64>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new(grid: GridSize, history: &AliveHistory, cycle_at: Option<u64>, elapsed: Duration) -> Self {
        Self {
            grid,
            generations: history.len(),
            total_alive: history.total_alive(),
            total_dead: history.total_dead(grid),
            peak_population: history.peak(),
            final_population: history.counts().last().copied().unwrap_or(0),
            cycle_at,
            elapsed,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid: {}", self.grid)?;
        writeln!(f, "Generations: {}", self.generations)?;
        writeln!(f, "Time elapsed (execution time): {:.3} milliseconds", self.elapsed.as_secs_f64() * 1000.0)?;
        writeln!(f, "Total Alive Cells: {}", self.total_alive)?;
        writeln!(f, "Total Dead Cells: {}", self.total_dead)?;
        writeln!(f, "Peak Population: {}", self.peak_population)?;
        write!(f, "Final Population: {}", self.final_population)?;
        if let Some(generation) = self.cycle_at {
            write!(f, "\nCycle detected at generation {generation}")?;
        }
        Ok(())
    }
}
