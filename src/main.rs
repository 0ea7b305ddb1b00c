//! Tic-tac-toe GUI
//!
//! Two players take turns on one window; the side panel lists every move.

use clap::Parser;
use tictactoe::config::{AppConfig, Cli};
use tictactoe::ui::TicTacToeApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let game_config = cli.game_config();
    tracing::info!(?game_config, "starting tic-tac-toe");

    let app_config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app_config.inner_size)
            .with_min_inner_size(app_config.min_inner_size)
            .with_title(app_config.title),
        ..Default::default()
    };

    eframe::run_native(
        app_config.title,
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, game_config)))),
    )
}
