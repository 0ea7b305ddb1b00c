//! Tic-tac-toe with move history
//!
//! A 3x3 game for two players at one screen. X moves first; three identical
//! marks on a row, column or diagonal win, and a board filled without such a
//! line is a tie. Every position is kept, so the players can jump back to any
//! earlier move and play on from there, which discards the moves that
//! followed.
//!
//! # Architecture
//!
//! - [`board`]: marks, cells and the board snapshot
//! - [`rules`]: win-line table and win/tie checks
//! - [`ui`]: game state controller, move list and the egui front-end
//! - [`config`]: command-line options and window settings
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Mark, Status};
//!
//! let mut game = GameState::default();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.handle_cell_click(cell);
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//! assert_eq!(game.highlighted_cells(), Some([0, 4, 8]));
//!
//! // Go back two moves and branch
//! game.jump_to(3).unwrap();
//! game.handle_cell_click(8);
//! assert_eq!(game.history_len(), 5);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, BOARD_SIZE, TOTAL_CELLS};
pub use error::GameError;
pub use ui::{GameState, MoveEntry, MoveKey, Status};
