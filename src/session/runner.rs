//! Session: one game from deal to finish, with its replay log.

use tracing::{debug, info, warn};

use super::error::SessionError;
use super::replay::{ReplayLog, ReplayWriter};
use crate::core::GameRng;
use crate::rules::{GameRegistry, Solitaire};
use crate::table::{parse_move, Location, Table};

/// What happened to a submitted command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The move was applied and the game continues.
    Applied,
    /// The move was applied and won the game.
    Finished,
    /// The player asked to leave.
    Quit,
}

/// A running game: rule-set, table, RNG and replay log.
///
/// ```
/// use solitaire::rules::GameRegistry;
/// use solitaire::session::{Outcome, Session};
///
/// let registry = GameRegistry::builtin();
/// let mut session = Session::new(&registry, "Spider", 42).unwrap();
/// assert_eq!(session.submit("M").unwrap(), Outcome::Applied);
/// assert_eq!(session.log().commands, vec!["M"]);
/// ```
pub struct Session {
    game: Box<dyn Solitaire>,
    table: Table,
    rng: GameRng,
    log: ReplayLog,
    writer: Option<ReplayWriter>,
}

impl Session {
    /// Create the named game and deal it from `seed`.
    pub fn new(registry: &GameRegistry, game: &str, seed: u64) -> Result<Self, SessionError> {
        let mut rules = registry
            .create(game)
            .ok_or_else(|| SessionError::UnknownGame(game.to_string()))?;
        let mut table = Table::new();
        let mut rng = GameRng::new(seed);
        rules.deal(&mut table, &mut rng)?;
        info!(game, seed, "session started");

        Ok(Self {
            game: rules,
            table,
            rng,
            log: ReplayLog::new(seed, game),
            writer: None,
        })
    }

    /// Recreate a session from a log by dealing again and replaying every
    /// command. Commands that fail are skipped, as they were when first
    /// entered.
    pub fn resume(registry: &GameRegistry, log: ReplayLog) -> Result<Self, SessionError> {
        let mut session = Self::new(registry, &log.game, log.seed)?;
        for command in &log.commands {
            match session.submit(command) {
                Ok(Outcome::Quit) => break,
                Ok(_) => {}
                Err(err) => warn!(command = %command, error = %err, "replayed command failed"),
            }
        }
        debug!(commands = session.log.commands.len(), "session resumed");
        Ok(session)
    }

    /// Record future commands to `writer` as well as in memory.
    pub fn attach_writer(&mut self, writer: ReplayWriter) {
        self.writer = Some(writer);
    }

    /// Parse and play one command.
    ///
    /// Every parseable command other than quit is logged before it is
    /// applied, so a replay reproduces rejected moves too.
    pub fn submit(&mut self, command: &str) -> Result<Outcome, SessionError> {
        let moves = parse_move(&self.table, command)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| SessionError::BadCommand(command.to_string()))?;
        if moves[0] == Location::Quit {
            return Ok(Outcome::Quit);
        }

        self.log.commands.push(command.to_string());
        if let Some(writer) = &mut self.writer {
            writer.record(command)?;
        }

        self.game.apply_move(&mut self.table, &moves)?;
        debug!(command, "move applied");

        if self.game.is_finished(&self.table) {
            info!(game = self.game.name(), "game won");
            Ok(Outcome::Finished)
        } else {
            Ok(Outcome::Applied)
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn game_name(&self) -> &'static str {
        self.game.name()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game.is_finished(&self.table)
    }

    #[must_use]
    pub fn log(&self) -> &ReplayLog {
        &self.log
    }

    /// Seed the session was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game.name())
            .field("seed", &self.rng.seed())
            .field("commands", &self.log.commands.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_game() {
        let err = Session::new(&GameRegistry::builtin(), "Freecell", 1).unwrap_err();
        assert!(matches!(err, SessionError::UnknownGame(name) if name == "Freecell"));
    }

    #[test]
    fn test_bad_commands_are_not_logged() {
        let mut session = Session::new(&GameRegistry::builtin(), "Example", 1).unwrap();
        assert!(matches!(session.submit("Z"), Err(SessionError::BadCommand(_))));
        assert!(matches!(session.submit(""), Err(SessionError::BadCommand(_))));
        assert!(session.log().commands.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new(&GameRegistry::builtin(), "Example", 1).unwrap();
        assert_eq!(session.submit("q").unwrap(), Outcome::Quit);
        assert!(session.log().commands.is_empty());
    }

    #[test]
    fn test_rejected_moves_are_logged() {
        let mut session = Session::new(&GameRegistry::builtin(), "Example", 1).unwrap();
        assert!(matches!(session.submit("M"), Err(SessionError::Game(_))));
        assert_eq!(session.log().commands, vec!["M"]);
    }
}
