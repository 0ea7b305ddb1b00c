//! Game rules for tic-tac-toe
//!
//! Three identical marks on a row, column or diagonal win. A board filled
//! after nine moves without such a line is a tie.

pub mod win;

pub use win::{find_winning_line, find_winning_mark, is_tie, LINES};
