//! The seam between the engine and whatever presents its boards.

use crate::Board;

/// What a renderer wants the driver to do after presenting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Continue,
    /// Stop between steps, e.g. the window was closed.
    Quit,
}

/// Receives every generation, starting with generation 0.
///
/// Renderers only ever see a shared reference, so a failing renderer can
/// stop the run but never alter the population.
pub trait Renderer {
    fn render(&mut self, generation: u64, board: &Board) -> Render;
}

impl<F> Renderer for F
where
    F: FnMut(u64, &Board) -> Render,
{
    fn render(&mut self, generation: u64, board: &Board) -> Render {
        self(generation, board)
    }
}
