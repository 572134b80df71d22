use std::hash::{Hash, Hasher};

use metrohash::MetroHash64;

use crate::Cell;

/// Rows of cells. A grid built through [`crate::world::validate`] or
/// [`crate::world::random_grid`] is rectangular; one built with
/// [`Grid::from_rows`] is taken as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// an all dead `rows` x `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Dead; cols]; rows],
        }
    }

    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// length of the first row, the one wrapping is based on.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Does nothing when `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            *slot = cell;
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    pub fn as_rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// 64 bit hash of the shape and cells, used to spot repeating generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = MetroHash64::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[test]
fn test_fingerprint() {
    let mut a = Grid::new(8, 8);
    let b = Grid::new(8, 8);
    assert_eq!(a.fingerprint(), b.fingerprint());
    a.set(3, 4, Cell::Live);
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_ne!(Grid::new(8, 9).fingerprint(), Grid::new(9, 8).fingerprint());
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = Grid::from_rows(vec![vec![Cell::Live; 3], vec![Cell::Dead; 1]]);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.get(1, 2), None);
    grid.set(1, 2, Cell::Live);
    assert_eq!(grid.get(1, 2), None);
    assert_eq!(grid.live_count(), 3);
}
