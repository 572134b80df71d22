use rand::Rng;

use crate::{error::StateDefect, utils::wrap, Pos};

pub const MIN_DIMENSION: usize = 1 << 3;
pub const MAX_DIMENSION: usize = 1 << 16;

pub const DEAD_CELL: u8 = 0;
pub const LIVE_CELL: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Live
    }

    pub fn is_dead(self) -> bool {
        self == Cell::Dead
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            DEAD_CELL => Some(Cell::Dead),
            LIVE_CELL => Some(Cell::Live),
            _ => None,
        }
    }
}

pub use grid::Grid;
mod grid;

/// Checks the row count, the first row's length and that no row is ragged.
///
/// The row count is checked before any row is looked at, so an empty
/// candidate is rejected as [`StateDefect::TooFewRows`].
pub fn check_shape<T>(candidate: &[Vec<T>]) -> Result<(), StateDefect> {
    let rows = candidate.len();
    if rows < MIN_DIMENSION {
        return Err(StateDefect::TooFewRows(rows));
    }
    if rows > MAX_DIMENSION {
        return Err(StateDefect::TooManyRows(rows));
    }

    let cols = candidate[0].len();
    if cols < MIN_DIMENSION {
        return Err(StateDefect::TooFewColumns(cols));
    }
    if cols > MAX_DIMENSION {
        return Err(StateDefect::TooManyColumns(cols));
    }
    if let Some((row, line)) = candidate.iter().enumerate().find(|(_, line)| line.len() != cols) {
        return Err(StateDefect::RaggedRow {
            row,
            len: line.len(),
        });
    }
    Ok(())
}

/// Checks raw cell data and turns it into a [`Grid`].
pub fn validate(raw: &[Vec<u8>]) -> Result<Grid, StateDefect> {
    check_shape(raw)?;
    let cells = raw
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, &value)| {
                    Cell::from_raw(value).ok_or(StateDefect::InvalidCell { row, col, value })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::from_rows(cells))
}

/// Parses the text pattern format: `#`/`1` live, `.`/`0`/space dead.
/// Any other character is kept as its byte value so [`validate`] rejects it.
pub fn deserialize(text: &str) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = text
        .lines()
        .map(|line| {
            line.bytes()
                .map(|c| match c {
                    b'#' | b'1' => LIVE_CELL,
                    b'.' | b'0' | b' ' => DEAD_CELL,
                    other => other,
                })
                .collect()
        })
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// A `rows` x `cols` grid where each cell is live with probability one half.
pub fn random_grid(rows: usize, cols: usize, rng: &mut impl Rng) -> Grid {
    let cells = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| if rng.gen_bool(0.5) { Cell::Live } else { Cell::Dead })
                .collect()
        })
        .collect();
    Grid::from_rows(cells)
}

/// Reads a cell with both coordinates wrapped around the grid edges.
/// Columns wrap on the first row's length; cells missing from a short row read as dead.
pub fn get_wrapped(grid: &Grid, pos: Pos) -> Cell {
    if grid.is_empty() || grid.cols() == 0 {
        return Cell::Dead;
    }
    let row = wrap(pos.row, grid.rows());
    let col = wrap(pos.col, grid.cols());
    grid.get(row, col).unwrap_or(Cell::Dead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;
    use rand::{rngs::StdRng, SeedableRng};

    fn square(n: usize, value: u8) -> Vec<Vec<u8>> {
        vec![vec![value; n]; n]
    }

    #[test]
    fn accepts_minimal_grid() {
        let grid = validate(&square(8, DEAD_CELL)).unwrap();
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cols(), 8);
    }

    #[test]
    fn rejects_empty_without_inspecting_rows() {
        assert_eq!(validate(&[]), Err(StateDefect::TooFewRows(0)));
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(validate(&square(7, 0)), Err(StateDefect::TooFewRows(7)));
        assert_eq!(
            validate(&vec![vec![0; 7]; 8]),
            Err(StateDefect::TooFewColumns(7))
        );
        assert_eq!(
            validate(&vec![vec![0; MAX_DIMENSION + 1]; 8]),
            Err(StateDefect::TooManyColumns(MAX_DIMENSION + 1))
        );
        assert_eq!(
            validate(&vec![Vec::new(); MAX_DIMENSION + 1]),
            Err(StateDefect::TooManyRows(MAX_DIMENSION + 1))
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut raw = square(8, 0);
        raw[5].push(0);
        assert_eq!(
            validate(&raw),
            Err(StateDefect::RaggedRow { row: 5, len: 9 })
        );
    }

    #[test]
    fn shape_checks_typed_rows() {
        let mut rows = vec![vec![Cell::Dead; 8]; 8];
        assert_eq!(check_shape(&rows), Ok(()));
        rows[7].pop();
        assert_eq!(
            check_shape(&rows),
            Err(StateDefect::RaggedRow { row: 7, len: 7 })
        );
    }

    #[test]
    fn rejects_non_binary_cells() {
        let mut raw = square(8, 0);
        raw[2][3] = 2;
        assert_eq!(
            validate(&raw),
            Err(StateDefect::InvalidCell {
                row: 2,
                col: 3,
                value: 2
            })
        );
    }

    #[test]
    fn deserializes_pattern_text() {
        let raw = deserialize("#.\n 1\n0x\n\n");
        assert_eq!(raw, vec![vec![1, 0], vec![0, 1], vec![0, b'x']]);
    }

    #[test]
    fn random_grid_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_grid(9, 13, &mut rng);
        assert_eq!(grid.rows(), 9);
        assert!(grid.iter_rows().all(|row| row.len() == 13));
        let live = grid.live_count();
        assert!(live > 0 && live < 9 * 13);
    }

    #[test]
    fn wrapped_reads_cross_edges() {
        let mut grid = Grid::new(8, 8);
        grid.set(7, 7, Cell::Live);
        assert!(get_wrapped(&grid, pos!(-1, -1)).is_alive());
        assert!(get_wrapped(&grid, pos!(15, 15)).is_alive());
        assert!(get_wrapped(&Grid::default(), pos!(0, 0)).is_dead());
    }
}
