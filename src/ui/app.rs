//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel,
};
use tracing::warn;

use super::board_view::BoardView;
use super::game_state::{GameState, Status};
use super::theme::*;
use crate::config::GameConfig;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(&config),
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Toggle Sort Order (S)").clicked() {
                        self.state.toggle_sort_order();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Move {} of {}",
                        self.state.current_move(),
                        self.state.history_len() - 1
                    ));
                });
            });
        });
    }

    /// Render the side panel with status and move history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Status line: winner, tie or next player
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let status = self.state.status();
        let color = match status {
            Status::Winner(_) => WIN_HIGHLIGHT,
            Status::Tie => TEXT_SECONDARY,
            Status::NextPlayer(mark) => mark_color(mark),
        };

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(status.to_string()).size(20.0).strong().color(color));
        });
    }

    /// Sort toggle, new game and the move list
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let mut jump = None;

        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("Toggle Sort Order").clicked() {
                    self.state.toggle_sort_order();
                }
                if ui.button("New Game").clicked() {
                    self.state.new_game();
                }
            });
            ui.add_space(8.0);

            ScrollArea::vertical().show(ui, |ui| {
                for entry in self.state.move_list() {
                    ui.push_id(entry.key, |ui| {
                        if entry.is_current {
                            let text = RichText::new(entry.label.as_str())
                                .color(TEXT_PRIMARY)
                                .strong();
                            ui.label(text);
                        } else if ui.button(entry.label.as_str()).clicked() {
                            jump = Some(entry.move_index);
                        }
                    });
                }
            });
        });

        if let Some(move_index) = jump {
            if let Err(err) = self.state.jump_to(move_index) {
                warn!(%err, "jump rejected");
            }
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let board = self.state.current_board();
                let clicked = self.board_view.show(
                    ui,
                    &board,
                    self.state.next_mark(),
                    self.state.highlighted_cells(),
                );

                if let Some(index) = clicked {
                    self.state.handle_cell_click(index);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::S), i.key_pressed(egui::Key::N)));

        // S - Toggle sort order
        if toggle {
            self.state.toggle_sort_order();
        }

        // N - New game
        if new_game {
            self.state.new_game();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
