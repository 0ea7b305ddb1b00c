//! GUI module for the tic-tac-toe game
//!
//! Game state and the move list are plain data; `app` and `board_view`
//! draw them with egui/eframe.

mod app;
mod board_view;
pub mod game_state;
pub mod move_list;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameState, HistoryEntry, Status};
pub use move_list::{MoveEntry, MoveKey};
