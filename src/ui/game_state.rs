//! Game state management: history, current move and display settings

use tracing::{debug, info, warn};

use super::move_list::{self, MoveEntry, MoveKey};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::{find_winning_line, find_winning_mark, is_tie};
use crate::{Board, Cell, Mark};

/// One recorded snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this snapshot, `None` for the game start
    pub location: Option<Cell>,
    pub key: MoveKey,
}

impl HistoryEntry {
    /// The empty board every history begins with
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
            key: MoveKey::new(),
        }
    }
}

/// Status line shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    Tie,
    NextPlayer(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::Tie => f.write_str("It's a tie!"),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Main game state
///
/// Only `play`, `jump_to` and `toggle_sort_order` change it; everything the
/// UI shows (status, highlight, move list) is derived on demand.
#[derive(Debug, Clone)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_move: usize,
    sort_ascending: bool,
    track_locations: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_move: 0,
            sort_ascending: config.sort_ascending,
            track_locations: config.track_locations,
        }
    }

    /// Start over, keeping sort order and location tracking
    pub fn new_game(&mut self) {
        info!(moves = self.history.len() - 1, "starting new game");
        self.history = vec![HistoryEntry::start()];
        self.current_move = 0;
    }

    /// Snapshot at the current move pointer
    pub fn current_board(&self) -> Board {
        self.history[self.current_move].board
    }

    #[inline]
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Moves on the displayed board; equal to the move pointer
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.current_move
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Cells played for every recorded move, oldest first
    pub fn locations(&self) -> Vec<Cell> {
        self.history.iter().filter_map(|e| e.location).collect()
    }

    /// Mark whose turn it is on the displayed board
    #[inline]
    pub fn next_mark(&self) -> Mark {
        Mark::to_move(self.current_move)
    }

    #[inline]
    pub fn is_sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    #[inline]
    pub fn track_locations(&self) -> bool {
        self.track_locations
    }

    /// Handle a click on a board cell
    ///
    /// Ignored when the displayed board is already won or the cell is taken.
    /// Returns whether a move was played.
    pub fn handle_cell_click(&mut self, index: usize) -> bool {
        let cell = match Cell::from_index(index) {
            Ok(cell) => cell,
            Err(err) => {
                debug!(%err, "click ignored");
                return false;
            }
        };

        let board = self.current_board();
        if let Some(winner) = find_winning_mark(&board) {
            debug!(index, %winner, "click ignored: game already won");
            return false;
        }
        if !board.is_empty(index) {
            debug!(index, "click ignored: cell occupied");
            return false;
        }

        let next = board.with_mark(cell, self.next_mark());
        match self.play(next, index) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "move rejected");
                false
            }
        }
    }

    /// Record `next` as the snapshot after the current one
    ///
    /// Any history after the current move is discarded first. `next` must be
    /// the current board with the mark to move written at `played`; nothing
    /// changes when it is not.
    pub fn play(&mut self, next: Board, played: usize) -> Result<(), GameError> {
        let cell = Cell::from_index(played)?;
        let board = self.current_board();

        if let Some(winner) = find_winning_mark(&board) {
            return Err(GameError::GameAlreadyWon(winner));
        }
        if !board.is_empty(played) {
            return Err(GameError::CellOccupied(played));
        }
        let expected = self.next_mark();
        if next != board.with_mark(cell, expected) {
            return Err(GameError::IllegalSnapshot {
                cell: played,
                expected,
            });
        }

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry {
            board: next,
            location: Some(cell),
            key: MoveKey::new(),
        });
        self.current_move = self.history.len() - 1;

        debug!(
            mark = %expected,
            index = played,
            move_number = self.current_move,
            discarded,
            "move played"
        );
        Ok(())
    }

    /// Display the snapshot at `move_index` without touching history
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        if move_index >= self.history.len() {
            return Err(GameError::MoveOutOfRange {
                index: move_index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = move_index, "jump");
        self.current_move = move_index;
        Ok(())
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        debug!(ascending = self.sort_ascending, "sort order toggled");
    }

    /// Status for the displayed board: winner, then tie, then next player
    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(winner) = find_winning_mark(&board) {
            Status::Winner(winner)
        } else if is_tie(&board, self.moves_played()) {
            Status::Tie
        } else {
            Status::NextPlayer(self.next_mark())
        }
    }

    /// Cells to highlight on the displayed board
    pub fn highlighted_cells(&self) -> Option<[usize; 3]> {
        find_winning_line(&self.current_board())
    }

    /// Move list in display order
    pub fn move_list(&self) -> Vec<MoveEntry> {
        move_list::build(
            &self.history,
            self.current_move,
            self.sort_ascending,
            self.track_locations,
        )
    }
}
