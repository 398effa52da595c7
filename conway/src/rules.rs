// rules.rs - B3/S23 survival and birth predicates

use crate::{Board, Cell, GridSize, grid::neighbors};

/// Number of alive cells among the distinct neighbours of `cell`.
///
/// Neighbours are a set: on grids of size 1 or 2 a coordinate reached through
/// several offsets counts once, and a cell can count itself.
pub fn alive_neighbors(cell: Cell, board: &Board, grid: GridSize) -> u8 {
    let mut around = neighbors(cell, grid);
    around.sort_unstable();

    let mut count = 0;
    let mut previous = None;
    for n in around {
        if previous != Some(n) && board.is_alive(n) {
            count += 1;
        }
        previous = Some(n);
    }
    count
}

/// Conway's rule for a cell that is `alive` with `count` alive neighbours.
pub const fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Whether an alive cell stays alive next generation.
pub fn will_survive(cell: Cell, board: &Board, grid: GridSize) -> bool {
    next_state(true, alive_neighbors(cell, board, grid))
}

/// Whether a dead cell comes alive next generation.
pub fn will_be_born(cell: Cell, board: &Board, grid: GridSize) -> bool {
    next_state(false, alive_neighbors(cell, board, grid))
}
