//! Command-line interface for timetravel_games.

use clap::Parser;
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel_games")]
#[command(about = "Play tic-tac-toe, jump back to any move and branch from there", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./timetravel.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print every frame as a JSON document instead of a text board
    #[arg(long)]
    pub json: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetravel_games"]);
        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "timetravel_games",
            "--config",
            "game.toml",
            "--json",
            "-s",
            "moves.txt",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert!(cli.json);
        assert_eq!(cli.script, Some(PathBuf::from("moves.txt")));
    }
}
