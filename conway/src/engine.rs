// engine.rs - Board initialization and sparse generation stepping

use std::collections::HashSet;

use tracing::trace;

use crate::{
    Board, Cell, GridSize, LifeError, Result,
    grid::neighbors,
    rules::{will_be_born, will_survive},
};

/// Validates `shape` against `grid` and builds generation 0.
///
/// Fails on the first coordinate that is not strictly below the grid size on
/// both axes. Duplicate coordinates collapse into one alive cell.
pub fn initialize<I, P>(grid: GridSize, shape: I) -> Result<Board>
where
    I: IntoIterator<Item = P>,
    P: Into<Cell>,
{
    let mut cells = HashSet::new();
    for point in shape {
        let cell = point.into();
        if !grid.contains(cell) {
            return Err(LifeError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: grid.get(),
                height: grid.get(),
            });
        }
        cells.insert(cell);
    }
    Ok(Board::from_cells(cells))
}

/// Computes the generation following `board`.
///
/// Only alive cells and their dead neighbours are visited, so the work is
/// proportional to the population rather than to the grid area. Every
/// decision reads `board` alone, which makes the iteration order irrelevant.
pub fn step(board: &Board, grid: GridSize) -> Board {
    let mut next = HashSet::with_capacity(board.population());
    // Cells already resolved during this step. Dropped on return.
    let mut evaluated = HashSet::with_capacity(board.population() * 4);

    for cell in board.iter() {
        if will_survive(cell, board, grid) {
            next.insert(cell);
        }
        evaluated.insert(cell);

        for candidate in neighbors(cell, grid) {
            if board.is_alive(candidate) || !evaluated.insert(candidate) {
                continue;
            }
            if will_be_born(candidate, board, grid) {
                next.insert(candidate);
            }
        }
    }

    trace!(
        before = board.population(),
        after = next.len(),
        resolved = evaluated.len(),
        "stepped generation"
    );
    Board::from_cells(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::GLIDER;

    fn grid(n: u32) -> GridSize {
        GridSize::new(n).unwrap()
    }

    fn cells(board: &Board) -> Vec<(u32, u32)> {
        board.sorted_cells().into_iter().map(|c| (c.x, c.y)).collect()
    }

    fn sorted(mut points: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
        points.sort_unstable();
        points
    }

    fn run(mut board: Board, grid: GridSize, steps: usize) -> Board {
        for _ in 0..steps {
            board = step(&board, grid);
        }
        board
    }

    #[test]
    fn test_initialize_bounds() {
        let err = initialize(grid(5), [(5, 0)]).unwrap_err();
        assert_eq!(err, LifeError::OutOfBounds { x: 5, y: 0, width: 5, height: 5 });

        let board = initialize(grid(5), [(4, 4)]).unwrap();
        assert_eq!(cells(&board), vec![(4, 4)]);
    }

    #[test]
    fn test_initialize_reports_first_offender() {
        let err = initialize(grid(5), [(1, 1), (0, 7), (9, 9)]).unwrap_err();
        assert_eq!(err, LifeError::OutOfBounds { x: 0, y: 7, width: 5, height: 5 });
    }

    #[test]
    fn test_initialize_collapses_duplicates() {
        let board = initialize(grid(5), [(1, 1), (1, 1), (2, 3)]).unwrap();
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_empty_is_fixed_point() {
        let next = step(&Board::empty(), grid(10));
        assert!(next.is_empty());
    }

    #[test]
    fn test_every_neighbor_count() {
        // Centre (3, 3) on a 7x7 grid with its first k neighbours alive.
        let g = grid(7);
        let centre = Cell::new(3, 3);
        let around = neighbors(centre, g);

        for k in 0..=8 {
            for alive in [false, true] {
                let mut shape: Vec<Cell> = around[..k].to_vec();
                if alive {
                    shape.push(centre);
                }
                let board = initialize(g, shape).unwrap();
                let next = step(&board, g);
                let expected = if alive { k == 2 || k == 3 } else { k == 3 };
                assert_eq!(next.is_alive(centre), expected, "alive={alive} k={k}");
            }
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let g = grid(4);
        let block = initialize(g, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        assert_eq!(step(&block, g), block);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let g = grid(8);
        let horizontal = initialize(g, [(2, 3), (3, 3), (4, 3)]).unwrap();

        let once = step(&horizontal, g);
        assert_eq!(cells(&once), vec![(3, 2), (3, 3), (3, 4)]);
        assert_eq!(step(&once, g), horizontal);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let g = grid(20);
        let start: Vec<(u32, u32)> = GLIDER.cells.iter().map(|&(x, y)| (x + 5, y + 5)).collect();
        let board = initialize(g, start.clone()).unwrap();

        let after = run(board, g, 4);
        let moved = sorted(start.iter().map(|&(x, y)| (x + 1, y + 1)).collect());
        assert_eq!(cells(&after), moved);
    }

    #[test]
    fn test_glider_wraps_around_the_corner() {
        let g = grid(20);
        let at = |dx: u32, dy: u32| -> Vec<(u32, u32)> {
            GLIDER.cells.iter().map(|&(x, y)| ((x + dx) % 20, (y + dy) % 20)).collect()
        };
        let board = initialize(g, at(18, 18)).unwrap();

        let after = run(board, g, 4);
        assert_eq!(cells(&after), sorted(at(19, 19)));
    }

    #[test]
    fn test_step_does_not_touch_input() {
        let g = grid(8);
        let board = initialize(g, [(2, 3), (3, 3), (4, 3)]).unwrap();
        let snapshot = board.clone();
        let _ = step(&board, g);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_single_cell_grid_quirk() {
        // The lone cell is its own only neighbour: one alive neighbour, so it dies.
        let g = grid(1);
        let board = initialize(g, [(0, 0)]).unwrap();
        assert!(step(&board, g).is_empty());
    }
}
