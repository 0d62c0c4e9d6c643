use thiserror::Error;

/// Errors raised by the grid edit entry points. Running out of paths is not one of them: an
/// unreachable goal is reported as an empty [PathResult](crate::path::PathResult).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: i32, rows: i32 },

    #[error("({x}, {y}) lies outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
    },

    #[error("({x}, {y}) holds the start or end marker and cannot become an obstacle")]
    ProtectedCell { x: i32, y: i32 },
}

pub type Result<T> = std::result::Result<T, GridError>;
