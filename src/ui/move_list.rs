//! Selectable move history entries

use uuid::Uuid;

use super::game_state::HistoryEntry;
use crate::board::Cell;

/// Stable identity of a history entry, used as its widget id
///
/// Assigned once when the snapshot is recorded so it survives re-renders
/// and order reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveKey(Uuid);

impl MoveKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MoveKey {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to
    pub move_index: usize,
    pub key: MoveKey,
    pub label: String,
    /// The displayed move: rendered as plain text instead of a button
    pub is_current: bool,
}

/// Label for a history entry
pub fn describe(move_index: usize, location: Option<Cell>, track_locations: bool) -> String {
    if move_index == 0 {
        return "Go to game start".to_string();
    }
    match location {
        Some(cell) if track_locations => {
            let (row, col) = cell.display_coords();
            format!("Go to move # {} on Row: {} Col: {}", move_index, row, col)
        }
        _ => format!("Go to move # {}", move_index),
    }
}

/// Build the display list, newest first when `ascending` is false
pub fn build(
    history: &[HistoryEntry],
    current_move: usize,
    ascending: bool,
    track_locations: bool,
) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| MoveEntry {
            move_index: i,
            key: entry.key,
            label: describe(i, entry.location, track_locations),
            is_current: i == current_move,
        })
        .collect();

    if !ascending {
        entries.reverse();
    }
    entries
}
