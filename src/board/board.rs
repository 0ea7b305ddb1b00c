//! Board snapshot: nine marks in row-major order

use super::{Cell, Mark, TOTAL_CELLS};

/// One snapshot of the 3x3 grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from marks laid out row by row
    pub fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get mark at index, `Mark::Empty` for indices off the board
    #[inline]
    pub fn get(&self, idx: usize) -> Mark {
        self.cells.get(idx).copied().unwrap_or(Mark::Empty)
    }

    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.get(idx).is_empty()
    }

    /// Set a mark without any rule checks
    #[inline]
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.cells[cell.to_index()] = mark;
    }

    /// Copy of this board with `cell` set to `mark`
    #[must_use]
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Self {
        let mut next = *self;
        next.set(cell, mark);
        next
    }

    /// Number of non-empty cells
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == TOTAL_CELLS
    }

    /// Indices where `self` and `other` differ
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        (0..TOTAL_CELLS)
            .filter(|&i| self.cells[i] != other.cells[i])
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for mark in row {
                let c = match mark {
                    Mark::Empty => '.',
                    Mark::X => 'X',
                    Mark::O => 'O',
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
