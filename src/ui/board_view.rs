//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Mark, BOARD_SIZE};
use egui::{CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// Whether `idx` belongs to the highlighted winning line
fn in_line(highlighted: Option<[usize; 3]>, idx: usize) -> bool {
    highlighted.is_some_and(|line| line.contains(&idx))
}

impl BoardView {
    /// Render the board and return the index of a clicked cell, if any
    ///
    /// Every click on a cell is reported; deciding whether it counts is left
    /// to the game state.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next_mark: Mark,
        highlighted: Option<[usize; 3]>,
    ) -> Option<usize> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            self.draw_cell(&painter, idx, board.get(idx), in_line(highlighted, idx));
        }
        self.draw_grid(&painter);

        let accepting = highlighted.is_none();
        if let Some(idx) = self.cell_at(response.hover_pos()) {
            if accepting && board.is_empty(idx) {
                self.draw_hover_preview(&painter, idx, next_mark);
            }
        }

        // Touch input has no hover, so take the position from the press itself
        if response.clicked() {
            return self.cell_at(response.interact_pointer_pos());
        }

        None
    }

    /// Draw the lines between cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw one cell background and its mark
    fn draw_cell(&self, painter: &Painter, idx: usize, mark: Mark, winning: bool) {
        let rect = self.cell_rect(idx).shrink(GRID_LINE_WIDTH);
        let fill = if winning { WIN_HIGHLIGHT } else { CELL_BG };
        painter.rect_filled(rect, CornerRadius::same(4), fill);

        if !mark.is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                mark.symbol(),
                FontId::proportional(self.cell_size * MARK_SIZE_RATIO),
                if winning { TEXT_PRIMARY } else { mark_color(mark) },
            );
        }
    }

    /// Faint preview of the mark that would be placed
    fn draw_hover_preview(&self, painter: &Painter, idx: usize, mark: Mark) {
        let rect = self.cell_rect(idx).shrink(GRID_LINE_WIDTH);
        painter.rect_filled(rect, CornerRadius::same(4), hover_preview());
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            mark.symbol(),
            FontId::proportional(self.cell_size * MARK_SIZE_RATIO),
            mark_color(mark).gamma_multiply(0.4),
        );
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, idx: usize) -> Rect {
        let row = (idx / BOARD_SIZE) as f32;
        let col = (idx % BOARD_SIZE) as f32;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + col * self.cell_size,
                BOARD_MARGIN + row * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Cell under an optional pointer position
    fn cell_at(&self, pointer: Option<Pos2>) -> Option<usize> {
        pointer.and_then(|p| self.screen_to_cell(p))
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32 {
            Some(row as usize * BOARD_SIZE + col as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at_origin() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(332.0)),
        }
    }

    #[test]
    fn test_screen_to_cell() {
        let view = view_at_origin();
        assert_eq!(view.screen_to_cell(Pos2::new(20.0, 20.0)), Some(0));
        assert_eq!(view.screen_to_cell(Pos2::new(166.0, 166.0)), Some(4));
        assert_eq!(view.screen_to_cell(Pos2::new(300.0, 120.0)), Some(5));
        assert_eq!(view.screen_to_cell(Pos2::new(5.0, 5.0)), None);
        assert_eq!(view.screen_to_cell(Pos2::new(320.0, 320.0)), None);
    }

    #[test]
    fn test_press_without_hover() {
        let view = view_at_origin();
        // A touch press carries a position even though nothing hovered
        assert_eq!(view.cell_at(Some(Pos2::new(166.0, 166.0))), Some(4));
        assert_eq!(view.cell_at(None), None);
    }

    #[test]
    fn test_in_line() {
        assert!(in_line(Some([0, 4, 8]), 4));
        assert!(!in_line(Some([0, 4, 8]), 5));
        assert!(!in_line(None, 4));
    }

    #[test]
    fn test_cell_rect_round_trip() {
        let view = view_at_origin();
        for idx in 0..9 {
            assert_eq!(view.screen_to_cell(view.cell_rect(idx).center()), Some(idx));
        }
    }
}
