//! Start-up configuration

use clap::Parser;

/// Window geometry and title
pub struct AppConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe",
            inner_size: [640.0, 420.0],
            min_inner_size: [520.0, 360.0],
        }
    }
}

/// Display settings a game starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Chronological move list; newest first when false
    pub sort_ascending: bool,
    /// Append the played row and column to move list labels
    pub track_locations: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sort_ascending: true,
            track_locations: true,
        }
    }
}

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe with move history")]
pub struct Cli {
    /// Show the move list newest first
    #[arg(long)]
    pub descending: bool,

    /// Leave row/column out of move list labels
    #[arg(long)]
    pub hide_locations: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            sort_ascending: !self.descending,
            track_locations: !self.hide_locations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.game_config(), GameConfig::default());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--descending",
            "--hide-locations",
            "--log-level",
            "debug",
        ]);
        let config = cli.game_config();
        assert!(!config.sort_ascending);
        assert!(!config.track_locations);
        assert_eq!(cli.log_level, "debug");
    }
}
