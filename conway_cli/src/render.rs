// render.rs - Terminal renderer: text frames and per-generation logging

use std::io::Write;

use conway::{Board, Cell, GridSize, Render, Renderer};
use tracing::{debug, warn};

pub const LIVE: char = '#';
pub const DEAD: char = '.';

/// Logs each generation and, when `show` is set, prints it as a text grid.
pub struct TerminalRenderer<W: Write> {
    grid: GridSize,
    show: bool,
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(grid: GridSize, show: bool, out: W) -> Self {
        Self { grid, show, out }
    }

    fn draw(&mut self, generation: u64, board: &Board) -> std::io::Result<()> {
        let n = self.grid.get();
        let mut frame = String::with_capacity(frame_capacity(n));
        frame.push_str(&format!("Generation {generation} ({} alive)\n", board.population()));
        for y in 0..n {
            for x in 0..n {
                frame.push(if board.is_alive(Cell::new(x, y)) { LIVE } else { DEAD });
            }
            frame.push('\n');
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

/// Bytes in one text frame: a header plus `n` rows of `n` cells and a newline.
fn frame_capacity(n: u32) -> usize {
    (n as usize + 1) * n as usize + 32
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, generation: u64, board: &Board) -> Render {
        debug!(generation, population = board.population(), "generation");
        if !self.show {
            return Render::Continue;
        }
        match self.draw(generation, board) {
            Ok(()) => Render::Continue,
            Err(err) => {
                warn!(%err, "output closed, stopping");
                Render::Quit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::initialize;

    #[test]
    fn test_draws_frame() {
        let grid = GridSize::new(3).unwrap();
        let board = initialize(grid, [(0, 0), (2, 1)]).unwrap();
        let mut out = Vec::new();
        let mut renderer = TerminalRenderer::new(grid, true, &mut out);

        assert_eq!(renderer.render(4, &board), Render::Continue);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Generation 4 (2 alive)\n#..\n..#\n...\n");
    }

    #[test]
    fn test_hidden_frames_write_nothing() {
        let grid = GridSize::new(3).unwrap();
        let mut out = Vec::new();
        let mut renderer = TerminalRenderer::new(grid, false, &mut out);
        renderer.render(0, &Board::empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_frame_capacity_on_wide_grids() {
        assert_eq!(frame_capacity(3), 4 * 3 + 32);
        assert_eq!(frame_capacity(65_536), 65_537 * 65_536 + 32);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_quits() {
        let grid = GridSize::new(3).unwrap();
        let mut renderer = TerminalRenderer::new(grid, true, Broken);
        assert_eq!(renderer.render(0, &Board::empty()), Render::Quit);
    }
}
