//! Replay log.
//!
//! Plain text, one value per line:
//!
//! ```text
//! 1712345678      <- seed
//! Spider          <- game name
//! AB              <- commands, verbatim, in order
//! M
//! ```
//!
//! The seed and game name fully determine the deal, so replaying the
//! commands restores the exact position.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SessionError;

/// Seed, game name and the commands entered so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub seed: u64,
    pub game: String,
    pub commands: Vec<String>,
}

impl ReplayLog {
    pub fn new(seed: u64, game: impl Into<String>) -> Self {
        Self {
            seed,
            game: game.into(),
            commands: Vec::new(),
        }
    }

    /// Parse the text form.
    pub fn parse(text: &str) -> Result<Self, SessionError> {
        let mut lines = text.lines();
        let seed = lines
            .next()
            .ok_or_else(|| SessionError::BadLog("missing seed".into()))?
            .trim()
            .parse::<u64>()
            .map_err(|e| SessionError::BadLog(format!("invalid seed: {e}")))?;
        let game = lines
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| SessionError::BadLog("missing game name".into()))?
            .to_string();
        let commands = lines.map(str::to_string).collect();

        Ok(Self { seed, game, commands })
    }

    /// Read and parse a log file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

impl fmt::Display for ReplayLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.seed)?;
        writeln!(f, "{}", self.game)?;
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Appends commands to a log file as they are played.
#[derive(Debug)]
pub struct ReplayWriter {
    out: BufWriter<File>,
}

impl ReplayWriter {
    /// Start a new log, replacing any existing file.
    pub fn create(path: impl AsRef<Path>, seed: u64, game: &str) -> Result<Self, SessionError> {
        let mut writer = Self {
            out: BufWriter::new(File::create(path)?),
        };
        writer.record(&seed.to_string())?;
        writer.record(game)?;
        Ok(writer)
    }

    /// Continue an existing log.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Write one line and flush it.
    pub fn record(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let log = ReplayLog::parse("42\nSpider\nAB\nM\n").unwrap();
        assert_eq!(log.seed, 42);
        assert_eq!(log.game, "Spider");
        assert_eq!(log.commands, vec!["AB", "M"]);
    }

    #[test]
    fn test_parse_header_only() {
        let log = ReplayLog::parse("7\nExample").unwrap();
        assert!(log.commands.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(ReplayLog::parse(""), Err(SessionError::BadLog(_))));
        assert!(matches!(ReplayLog::parse("seed\nSpider\n"), Err(SessionError::BadLog(_))));
        assert!(matches!(ReplayLog::parse("3\n"), Err(SessionError::BadLog(_))));
    }

    #[test]
    fn test_display_matches_parse() {
        let mut log = ReplayLog::new(9, "Example");
        log.commands.push("a1".into());
        log.commands.push("BC".into());

        let text = log.to_string();
        assert_eq!(text, "9\nExample\na1\nBC\n");
        assert_eq!(ReplayLog::parse(&text).unwrap(), log);
    }

    #[test]
    fn test_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");

        let mut writer = ReplayWriter::create(&path, 5, "Spider").unwrap();
        writer.record("M").unwrap();
        drop(writer);

        let mut writer = ReplayWriter::append(&path).unwrap();
        writer.record("AB").unwrap();
        drop(writer);

        let log = ReplayLog::load(&path).unwrap();
        assert_eq!(log.seed, 5);
        assert_eq!(log.game, "Spider");
        assert_eq!(log.commands, vec!["M", "AB"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReplayLog::load(dir.path().join("nope.log")).unwrap_err();
        assert!(matches!(err, SessionError::Io(_)));
    }
}
