use log::{debug, info, warn};
use rand::Rng;

use crate::{
    error::EngineError,
    pos,
    world::{self, get_wrapped, Grid, MAX_DIMENSION, MIN_DIMENSION},
    Cell,
};

/// Game of life on a torus.
///
/// The engine owns both of its grids. [`LifeEngine::initial_state`] and
/// [`LifeEngine::current_state`] lend read-only views, callers clone them
/// when they need to keep a generation around.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    initial: Grid,
    current: Grid,
}

impl LifeEngine {
    /// Cells of a typed grid are always dead or live, only its shape is checked.
    pub fn from_state(state: Grid) -> Result<Self, EngineError> {
        world::check_shape(state.as_rows())?;
        Ok(Self::from_valid(state))
    }

    pub fn from_raw(raw: &[Vec<u8>]) -> Result<Self, EngineError> {
        let grid = world::validate(raw)?;
        Ok(Self::from_valid(grid))
    }

    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, EngineError> {
        Self::with_dimensions_and_rng(rows, cols, &mut rand::thread_rng())
    }

    pub fn with_dimensions_and_rng(
        rows: usize,
        cols: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, EngineError> {
        check_dimensions(rows, cols)?;
        Ok(Self::from_valid(world::random_grid(rows, cols, rng)))
    }

    fn from_valid(grid: Grid) -> Self {
        info!(
            "engine ready: {}x{} grid, {} live cells",
            grid.rows(),
            grid.cols(),
            grid.live_count()
        );
        Self {
            current: grid.clone(),
            initial: grid,
        }
    }

    pub fn initial_state(&self) -> &Grid {
        &self.initial
    }

    pub fn current_state(&self) -> &Grid {
        &self.current
    }

    pub fn is_cell_alive(cell: Cell) -> bool {
        cell.is_alive()
    }

    pub fn is_cell_dead(cell: Cell) -> bool {
        cell.is_dead()
    }

    pub fn reset(&mut self) -> &mut Self {
        debug!("resetting to the initial state");
        self.current = self.initial.clone();
        self
    }

    /// Replaces the current generation. The new grid is not validated.
    pub fn set_current_state(&mut self, state: Grid) -> &mut Self {
        if state.iter_rows().any(|row| row.len() != state.cols()) {
            warn!("current state set to a ragged grid");
        }
        self.current = state;
        self
    }

    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        let (row, col) = (row as isize, col as isize);
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| pos!(dr, dc)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(|offset| pos!(row, col) + offset)
            .filter(|&neighbor| get_wrapped(&self.current, neighbor).is_alive())
            .count()
    }

    pub fn next_step(&self) -> Grid {
        let cells = self
            .current
            .iter_rows()
            .enumerate()
            .map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(|(col, &cell)| next_cell(cell, self.count_live_neighbors(row, col)))
                    .collect()
            })
            .collect();
        Grid::from_rows(cells)
    }

    pub fn perform_next_step(&mut self) -> &mut Self {
        self.current = self.next_step();
        self
    }
}

fn next_cell(cell: Cell, neighbor_count: usize) -> Cell {
    match (cell, neighbor_count) {
        (Cell::Live, 2 | 3) => Cell::Live, // stay
        (Cell::Dead, 3) => Cell::Live,     // becomes alive
        _ => Cell::Dead,                   // dies or stays dead
    }
}

pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), EngineError> {
    if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        return Err(EngineError::DimensionTooSmall { rows, cols });
    }
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(EngineError::DimensionTooLarge { rows, cols });
    }
    Ok(())
}
