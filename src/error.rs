//! Contract violations raised by the game controller

use thiserror::Error;

/// Errors returned when a controller precondition does not hold.
///
/// None of these reach the player: clicks that would trigger them are
/// filtered out before the controller is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell index {0} is outside the board")]
    CellOutOfRange(usize),

    #[error("cell at row {row}, column {col} is outside the board")]
    CoordinatesOutOfRange { row: u8, col: u8 },

    #[error("cell {0} is already marked")]
    CellOccupied(usize),

    #[error("game already won by {0}")]
    GameAlreadyWon(crate::Mark),

    #[error("snapshot is not the current board plus one {expected} at cell {cell}")]
    IllegalSnapshot { cell: usize, expected: crate::Mark },

    #[error("move {index} is outside history of length {len}")]
    MoveOutOfRange { index: usize, len: usize },
}
