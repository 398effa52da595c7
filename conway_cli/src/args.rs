// args.rs - Command line flags and the interactive prompts

use std::io::{BufRead, Write};

use clap::Parser;
use conway::{DEFAULT_GRID_SIZE, DEFAULT_ITERATIONS, LifeConfig, Shape, patterns::DEFAULT_DENSITY};
use eyre::{Result, WrapErr};

#[derive(Debug, Parser)]
#[command(name = "conway", about = "Conway's Game of Life on a toroidal grid")]
pub struct Args {
    /// Edge length of the square grid.
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Generations to compute after the initial one.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Initial shape: glider, blinker, toad, beacon, pulsar, r-pentomino, gosper, block or random.
    #[arg(short, long, default_value = "random")]
    pub shape: Shape,

    /// Seed for the random shape.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Share of cells alive in a random shape.
    #[arg(long, default_value_t = DEFAULT_DENSITY, allow_negative_numbers = true)]
    pub density: f64,

    /// Ask for shape, grid size and iterations on stdin.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print every generation as text.
    #[arg(long)]
    pub show: bool,
}

/// Everything a run needs, after flags and prompts are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParams {
    pub config: LifeConfig,
    pub shape: Shape,
}

impl Args {
    pub fn params(&self) -> Result<RunParams> {
        let config = LifeConfig::new(self.grid_size, self.iterations)?;
        Ok(RunParams { config, shape: self.seeded(self.shape)? })
    }

    /// Asks for each parameter in turn; an empty answer keeps the flag's value.
    pub fn prompt<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<RunParams> {
        let answer = ask(
            input,
            output,
            "Select initial shape pattern. {'glider', 'blinker', 'gosper', 'random'} | Default (random): ",
        )?;
        // Unknown names fall back to a random fill.
        let shape = match answer.as_deref() {
            Some(name) => name.parse().unwrap_or_else(|_| Shape::random()),
            None => self.shape,
        };

        let grid_size = match ask(input, output, &format!("Enter Grid Size | Default ({}): ", self.grid_size))? {
            Some(text) => text.parse().wrap_err_with(|| format!("invalid grid size {text:?}"))?,
            None => self.grid_size,
        };

        let iterations = match ask(
            input,
            output,
            &format!("Enter number of iterations for simulation | Default ({}): ", self.iterations),
        )? {
            Some(text) => text.parse().wrap_err_with(|| format!("invalid iteration count {text:?}"))?,
            None => self.iterations,
        };

        let config = LifeConfig::new(grid_size, iterations)?;
        Ok(RunParams { config, shape: self.seeded(shape)? })
    }

    fn seeded(&self, shape: Shape) -> Result<Shape> {
        Ok(match shape {
            Shape::Random { .. } => Shape::random_with(self.density, self.seed)?,
            other => other,
        })
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<Option<String>> {
    output.write_all(question.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).wrap_err("failed to read answer")?;
    let line = line.trim();
    Ok((!line.is_empty()).then(|| line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::LifeError;
    use conway::patterns::{BLINKER, GLIDER};
    use std::io::Cursor;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("conway").chain(extra.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let params = args(&[]).params().unwrap();
        assert_eq!(params.config, LifeConfig::default());
        assert!(matches!(params.shape, Shape::Random { seed: None, .. }));
    }

    #[test]
    fn test_flags() {
        let params = args(&["-g", "20", "-n", "7", "--shape", "glider"]).params().unwrap();
        assert_eq!(params.config, LifeConfig::new(20, 7).unwrap());
        assert_eq!(params.shape, Shape::Pattern(&GLIDER));
    }

    #[test]
    fn test_seed_reaches_random_shape() {
        let params = args(&["--seed", "42", "--density", "0.5"]).params().unwrap();
        assert_eq!(params.shape, Shape::Random { density: 0.5, seed: Some(42) });
    }

    #[test]
    fn test_density_outside_unit_range_rejected() {
        for density in ["NaN", "-0.5", "5"] {
            let err = args(&["--density", density]).params().unwrap_err();
            assert!(
                matches!(err.downcast_ref::<LifeError>(), Some(LifeError::InvalidDensity(_))),
                "{density}: {err}"
            );
        }
        assert!(args(&["--density", "1"]).params().is_ok());
    }

    #[test]
    fn test_density_ignored_for_patterns() {
        let params = args(&["--shape", "glider", "--density", "5"]).params().unwrap();
        assert_eq!(params.shape, Shape::Pattern(&GLIDER));
    }

    #[test]
    fn test_prompt_checks_density() {
        let mut input = Cursor::new("random\n\n\n");
        assert!(args(&["--density", "NaN"]).prompt(&mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_unknown_shape_flag_rejected() {
        assert!(Args::try_parse_from(["conway", "--shape", "spaceship"]).is_err());
    }

    #[test]
    fn test_zero_grid_rejected() {
        assert!(args(&["-g", "0"]).params().is_err());
    }

    #[test]
    fn test_prompt_answers() {
        let mut input = Cursor::new("blinker\n30\n12\n");
        let mut output = Vec::new();
        let params = args(&[]).prompt(&mut input, &mut output).unwrap();

        assert_eq!(params.shape, Shape::Pattern(&BLINKER));
        assert_eq!(params.config, LifeConfig::new(30, 12).unwrap());
        assert!(String::from_utf8(output).unwrap().contains("Enter Grid Size"));
    }

    #[test]
    fn test_prompt_blank_keeps_defaults() {
        let mut input = Cursor::new("\n\n\n");
        let params = args(&["-s", "glider"]).prompt(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(params.shape, Shape::Pattern(&GLIDER));
        assert_eq!(params.config, LifeConfig::default());
    }

    #[test]
    fn test_prompt_unknown_shape_is_random() {
        let mut input = Cursor::new("hexagon\n\n\n");
        let params = args(&[]).prompt(&mut input, &mut Vec::new()).unwrap();
        assert!(matches!(params.shape, Shape::Random { .. }));
    }

    #[test]
    fn test_prompt_bad_number() {
        let mut input = Cursor::new("\nlarge\n\n");
        assert!(args(&[]).prompt(&mut input, &mut Vec::new()).is_err());
    }
}
