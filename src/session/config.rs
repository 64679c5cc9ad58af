//! Command-line configuration for the interactive front end.
//!
//! CLI arguments take priority over environment variables, which take
//! priority over the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

/// Default replay log location.
pub const DEFAULT_LOG_FILE: &str = "solitaire.log";

#[derive(Parser, Debug, Clone)]
#[command(name = "solitaire")]
#[command(about = "Play solitaire in the terminal")]
pub struct SessionConfig {
    /// Continue the game recorded in the log file
    #[arg(long)]
    pub resume: bool,

    /// Replay log location
    #[arg(long, env = "SOLITAIRE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Seed for the deal (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Game to play, skipping the menu
    #[arg(long)]
    pub game: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SOLITAIRE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::parse_from(["solitaire"]);
        assert!(!config.resume);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.seed, None);
        assert_eq!(config.game, None);
    }

    #[test]
    fn test_flags() {
        let config = SessionConfig::parse_from([
            "solitaire",
            "--resume",
            "--log-file",
            "/tmp/x.log",
            "--seed",
            "17",
            "--game",
            "Spider",
            "--log-level",
            "debug",
        ]);
        assert!(config.resume);
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.game.as_deref(), Some("Spider"));
        assert_eq!(config.log_level, "debug");
    }
}
