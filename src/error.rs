use thiserror::Error;

/// Why a raw grid was rejected by the validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateDefect {
    #[error("{0} rows is too few")]
    TooFewRows(usize),
    #[error("{0} rows is too many")]
    TooManyRows(usize),
    #[error("{0} columns is too few")]
    TooFewColumns(usize),
    #[error("{0} columns is too many")]
    TooManyColumns(usize),
    /// row index and its length, which differs from the first row's
    #[error("row {row} has {len} cells, unlike the first row")]
    RaggedRow { row: usize, len: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid constructor call: expected 1 or 2 arguments, got {count}")]
    InvalidConstructorCall { count: usize },

    #[error("invalid initial state: {0}")]
    InvalidState(#[from] StateDefect),

    #[error("dimensions should be numbers, got {0:?}")]
    InvalidArgument(String),

    #[error("dimensions are too small: {rows}x{cols}")]
    DimensionTooSmall { rows: usize, cols: usize },

    #[error("dimensions are too big: {rows}x{cols}")]
    DimensionTooLarge { rows: usize, cols: usize },
}

