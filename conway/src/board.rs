// board.rs - Immutable snapshot of the alive population

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Cell;

/// The set of alive cells for one generation.
///
/// Boards are never mutated after construction: each step builds a new one.
/// Only the engine can build a board from raw cells, which keeps every cell
/// inside the grid it was validated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: HashSet<Cell>,
}

impl Board {
    pub(crate) fn from_cells(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }

    /// A board with no alive cells.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Alive cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Alive cells sorted by (x, y).
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Order-independent fingerprint of the population.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for cell in self.sorted_cells() {
            cell.hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Returns a new board with `cell` flipped.
    pub(crate) fn toggled(&self, cell: Cell) -> Self {
        let mut cells = self.cells.clone();
        if !cells.remove(&cell) {
            cells.insert(cell);
        }
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[(u32, u32)]) -> Board {
        Board::from_cells(cells.iter().map(|&c| Cell::from(c)).collect())
    }

    #[test]
    fn test_fingerprint_ignores_insertion_order() {
        let a = board(&[(0, 0), (1, 2), (3, 1)]);
        let b = board(&[(3, 1), (0, 0), (1, 2)]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), board(&[(0, 0)]).fingerprint());
    }

    #[test]
    fn test_toggled_leaves_original() {
        let a = board(&[(1, 1)]);
        let b = a.toggled(Cell::new(1, 1)).toggled(Cell::new(2, 2));
        assert!(a.is_alive(Cell::new(1, 1)));
        assert!(!b.is_alive(Cell::new(1, 1)));
        assert!(b.is_alive(Cell::new(2, 2)));
        assert_eq!(b.population(), 1);
    }
}
