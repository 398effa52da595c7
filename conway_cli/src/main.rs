// main.rs - Headless Game of Life runner
// Resolves the run parameters, steps the board and prints the totals

use std::io;
use std::time::Instant;

use clap::Parser;
use conway::Simulation;
use tracing::info;

mod args;      // Flags and prompts
mod render;    // Text renderer

use args::Args;
use render::TerminalRenderer;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("conway_cli=info".parse()?)
                .add_directive("conway=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let params = if args.interactive {
        args.prompt(&mut io::stdin().lock(), &mut io::stdout())?
    } else {
        args.params()?
    };

    let mut sim = Simulation::new(params.config, &params.shape)?;
    let mut renderer = TerminalRenderer::new(params.config.grid_size, args.show, io::stdout().lock());

    let start = Instant::now();
    info!(shape = %params.shape, "simulation started");
    sim.run(&mut renderer);
    let elapsed = start.elapsed();
    info!(generation = sim.generation(), "simulation ended");

    println!("{}", sim.summary(elapsed));
    Ok(())
}
