// main.rs - Desktop viewer for the toroidal Game of Life
// The engine owns the board; this window only steps it and paints snapshots

use std::time::{Duration, Instant};

use clap::Parser;
use conway::{
    Cell, DEFAULT_GRID_SIZE, DEFAULT_ITERATIONS, LifeConfig, PATTERNS, Shape, Simulation,
    patterns::DEFAULT_DENSITY,
};
use eframe::egui;
use tracing::{info, warn};

mod ui;        // eframe::App impl
mod view;      // Colors and tile geometry

use view::{DEFAULT_TILE_WIDTH, ViewConfig};

#[derive(Debug, Parser)]
#[command(name = "conway_gui", about = "Watch Conway's Game of Life on a toroidal grid")]
struct Args {
    /// Edge length of the square grid.
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u32,

    /// Generations to compute before the run stops.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Initial shape, see the pattern list in the window.
    #[arg(short, long, default_value = "random")]
    shape: Shape,

    /// Seed for random fills.
    #[arg(long)]
    seed: Option<u64>,

    /// Width of one cell in points.
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    tile_width: f32,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("conway_gui=info".parse()?)
                .add_directive("conway=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = LifeConfig::new(args.grid_size, args.iterations)?;
    let view = ViewConfig { tile_width: args.tile_width, ..ViewConfig::default() };
    let app = LifeApp::new(config, args.shape.with_seed(args.seed), view)?;

    let board = view.board_size(config.grid_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.x.max(760.0) + 40.0, board.y + 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| eyre::eyre!("viewer failed: {err}"))
}

/// Viewer state around one [`Simulation`].
pub struct LifeApp {
    sim: Simulation,
    pub view: ViewConfig,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub selected_pattern: usize,
    seed: Option<u64>,
    /// Time spent running since the last reset.
    running_time: Duration,
    reported: bool,
}

impl LifeApp {
    pub fn new(config: LifeConfig, shape: Shape, view: ViewConfig) -> conway::Result<Self> {
        let selected_pattern = match shape {
            Shape::Pattern(pattern) => PATTERNS.iter().position(|p| p == pattern).unwrap_or(0),
            Shape::Random { .. } => 0,
        };
        let seed = match shape {
            Shape::Random { seed, .. } => seed,
            Shape::Pattern(_) => None,
        };
        Ok(Self {
            sim: Simulation::new(config, &shape)?,
            view,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            selected_pattern,
            seed,
            running_time: Duration::ZERO,
            reported: false,
        })
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Steps once if running and the update interval has passed.
    /// Returns true when the board changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running {
            return false;
        }
        let since = now.saturating_duration_since(self.last_update);
        if since < self.update_interval {
            return false;
        }
        self.running_time += since;
        self.last_update = now;
        self.step_once();
        true
    }

    /// Computes one generation, pausing on a repeat or at the iteration limit.
    pub fn step_once(&mut self) {
        if self.sim.is_finished() {
            self.is_running = false;
            return;
        }
        let had_cycle = self.sim.cycle_at().is_some();
        self.sim.advance();

        if !had_cycle && self.sim.cycle_at().is_some() {
            self.is_running = false;
        }
        if self.sim.is_finished() {
            self.is_running = false;
            self.report();
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running && !self.sim.is_finished();
        if self.is_running {
            self.last_update = Instant::now();
        }
    }

    pub fn clear_grid(&mut self) {
        self.is_running = false;
        self.sim.clear();
        self.restarted();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.apply(Shape::Pattern(pattern));
        }
    }

    pub fn apply_random_pattern(&mut self) {
        // A fixed seed would redraw the same fill on every click.
        let seed = self.seed.take();
        self.apply(Shape::Random { density: DEFAULT_DENSITY, seed });
    }

    /// Flips a cell; only allowed while paused.
    pub fn toggle_cell(&mut self, cell: Cell) {
        if self.is_running {
            return;
        }
        if let Err(err) = self.sim.toggle(cell) {
            warn!(%err, "ignored click");
            return;
        }
        self.restarted();
    }

    fn apply(&mut self, shape: Shape) {
        self.is_running = false;
        match self.sim.reset(&shape) {
            Ok(()) => self.restarted(),
            Err(err) => warn!(%err, %shape, "pattern does not fit"),
        }
    }

    fn restarted(&mut self) {
        self.running_time = Duration::ZERO;
        self.reported = false;
    }

    fn report(&mut self) {
        if !self.reported {
            self.reported = true;
            info!("run finished\n{}", self.sim.summary(self.running_time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::patterns::{BLINKER, GLIDER, GOSPER_GLIDER_GUN};

    fn app(n: u32, iterations: u64, shape: Shape) -> LifeApp {
        LifeApp::new(LifeConfig::new(n, iterations).unwrap(), shape, ViewConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut app = app(20, 10, Shape::Pattern(&GLIDER));
        app.toggle_running();
        let start = app.last_update;

        assert!(!app.tick(start + Duration::from_millis(50)));
        assert!(app.tick(start + Duration::from_millis(250)));
        assert_eq!(app.sim().generation(), 1);
    }

    #[test]
    fn test_paused_app_does_not_step() {
        let mut app = app(20, 10, Shape::Pattern(&GLIDER));
        assert!(!app.tick(Instant::now() + Duration::from_secs(5)));
        assert_eq!(app.sim().generation(), 0);
    }

    #[test]
    fn test_stops_at_iteration_limit() {
        let mut app = app(20, 2, Shape::Pattern(&GLIDER));
        app.toggle_running();
        app.step_once();
        app.step_once();
        assert!(!app.is_running);
        app.step_once();
        assert_eq!(app.sim().generation(), 2);

        app.toggle_running();
        assert!(!app.is_running);
    }

    #[test]
    fn test_pauses_on_cycle() {
        let mut app = app(9, 50, Shape::Pattern(&BLINKER));
        app.toggle_running();
        app.step_once();
        assert!(app.is_running);
        app.step_once();
        assert!(!app.is_running);
        assert_eq!(app.sim().cycle_at(), Some(2));
    }

    #[test]
    fn test_selected_pattern_follows_shape() {
        let app = app(20, 10, Shape::Pattern(&BLINKER));
        assert_eq!(PATTERNS[app.selected_pattern].name, "Blinker");
    }

    #[test]
    fn test_oversized_pattern_keeps_board() {
        let mut app = app(20, 10, Shape::Pattern(&GLIDER));
        app.selected_pattern = PATTERNS.iter().position(|p| *p == GOSPER_GLIDER_GUN).unwrap();
        app.apply_selected_pattern();
        assert_eq!(app.sim().board().population(), 5);
    }

    #[test]
    fn test_toggle_only_when_paused() {
        let mut app = app(20, 10, Shape::Pattern(&GLIDER));
        app.toggle_cell(Cell::new(0, 0));
        assert_eq!(app.sim().board().population(), 6);

        app.toggle_running();
        app.toggle_cell(Cell::new(1, 1));
        assert_eq!(app.sim().board().population(), 6);
    }
}
