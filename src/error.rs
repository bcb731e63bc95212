use crate::core::Point;
use thiserror::Error;

/// Errors raised by the board and the move evaluators.
#[derive(Debug, Error)]
pub enum GomokuError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Invalid playout policy: {0:?}")]
    InvalidPolicy(String),

    #[error("Invalid board size: {0}")]
    InvalidSize(usize),

    #[error("Invalid coordinate ({row}, {col})")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("Point {point} is outside the board (maxpoint {maxpoint})")]
    OutOfRange { point: Point, maxpoint: usize },

    #[error("Illegal move at point {0}")]
    IllegalMove(Point),

    #[error("Undo at point {0} found no stone")]
    UndoFailed(Point),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("No move available")]
    NoMove,
}
