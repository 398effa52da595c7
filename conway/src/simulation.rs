// simulation.rs - Driver-side state: current board, generation, history

use std::time::Duration;

use tracing::{debug, info};

use crate::{
    AliveHistory, Board, Cell, CycleDetector, GridSize, LifeConfig, LifeError, Render, Renderer,
    Result, RunSummary, Shape, initialize, step,
};

/// One simulation run.
///
/// Owns the current board and replaces it wholesale on every step. The alive
/// history always holds one entry per generation, generation 0 included.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: LifeConfig,
    board: Board,
    generation: u64,
    history: AliveHistory,
    cycles: CycleDetector,
    cycle_at: Option<u64>,
}

impl Simulation {
    /// Builds generation 0 from `shape`.
    pub fn new(config: LifeConfig, shape: &Shape) -> Result<Self> {
        Self::with_cells(config, shape.cells(config.grid_size)?)
    }

    /// Builds generation 0 from explicit coordinates.
    pub fn with_cells<I, P>(config: LifeConfig, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Cell>,
    {
        let board = initialize(config.grid_size, cells)?;
        info!(
            grid = %config.grid_size,
            population = board.population(),
            iterations = config.iterations,
            "initialized board"
        );
        let mut sim = Self {
            config,
            board: Board::empty(),
            generation: 0,
            history: AliveHistory::new(),
            cycles: CycleDetector::new(),
            cycle_at: None,
        };
        sim.restart(board);
        Ok(sim)
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn grid(&self) -> GridSize {
        self.config.grid_size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history(&self) -> &AliveHistory {
        &self.history
    }

    /// Generation at which the board first repeated, if it has.
    pub fn cycle_at(&self) -> Option<u64> {
        self.cycle_at
    }

    /// True once the configured number of iterations has been computed.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.iterations
    }

    /// Computes the next generation and records it.
    pub fn advance(&mut self) -> &Board {
        self.board = step(&self.board, self.config.grid_size);
        self.generation += 1;
        self.history.record(&self.board);

        if self.cycles.observe(&self.board) && self.cycle_at.is_none() {
            info!(generation = self.generation, "board repeats a recent generation");
            self.cycle_at = Some(self.generation);
        }
        debug!(generation = self.generation, population = self.board.population(), "advanced");
        &self.board
    }

    /// Renders the current board, then steps until the iteration count is
    /// reached or the renderer quits. Returns the number of steps taken.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> u64 {
        let start = self.generation;
        if renderer.render(self.generation, &self.board) == Render::Quit {
            info!(generation = self.generation, "renderer quit");
            return 0;
        }
        while !self.is_finished() {
            self.advance();
            if renderer.render(self.generation, &self.board) == Render::Quit {
                info!(generation = self.generation, "renderer quit");
                break;
            }
        }
        info!(generations = self.generation, population = self.board.population(), "run complete");
        self.generation - start
    }

    /// Starts over from `shape`. On error the current run is left untouched.
    pub fn reset(&mut self, shape: &Shape) -> Result<()> {
        let board = initialize(self.config.grid_size, shape.cells(self.config.grid_size)?)?;
        info!(%shape, population = board.population(), "reset board");
        self.restart(board);
        Ok(())
    }

    /// Starts over from an empty board.
    pub fn clear(&mut self) {
        self.restart(Board::empty());
    }

    /// Flips one cell and starts over from the edited board.
    pub fn toggle(&mut self, cell: Cell) -> Result<()> {
        let grid = self.config.grid_size;
        if !grid.contains(cell) {
            return Err(LifeError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: grid.get(),
                height: grid.get(),
            });
        }
        let board = self.board.toggled(cell);
        self.restart(board);
        Ok(())
    }

    pub fn summary(&self, elapsed: Duration) -> RunSummary {
        RunSummary::new(self.config.grid_size, &self.history, self.cycle_at, elapsed)
    }

    fn restart(&mut self, board: Board) {
        self.board = board;
        self.generation = 0;
        self.history = AliveHistory::new();
        self.history.record(&self.board);
        self.cycles.clear();
        self.cycles.observe(&self.board);
        self.cycle_at = None;
    }
}
