//! Board representation for tic-tac-toe

pub mod board;


pub use board::Board;

use crate::error::GameError;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell marks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Mark to move after `moves_played` moves (X always opens)
    #[inline]
    pub fn to_move(moves_played: usize) -> Mark {
        if moves_played % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Symbol drawn in a cell, empty string for an empty cell
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Cell on the board, always within the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Checked construction from 0-based row and column
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(GameError::CoordinatesOutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Checked conversion from a row-major index
    pub fn from_index(idx: usize) -> Result<Self, GameError> {
        if idx >= TOTAL_CELLS {
            return Err(GameError::CellOutOfRange(idx));
        }
        Ok(Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        })
    }

    /// 1-based (row, col) as shown to the player
    #[inline]
    pub fn display_coords(self) -> (usize, usize) {
        (self.row as usize + 1, self.col as usize + 1)
    }
}
