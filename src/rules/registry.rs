//! Game registry keyed by name.
//!
//! The session looks games up by the name stored in a replay log, so the
//! registry is the single place mapping names to rule-sets.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::engine::Solitaire;
use crate::games::{ExampleGame, SpiderGame};

/// Factory function creating a fresh game instance.
pub type GameFactory = fn() -> Box<dyn Solitaire>;

/// Name → factory map.
#[derive(Clone, Default)]
pub struct GameRegistry {
    factories: FxHashMap<String, GameFactory>,
}

impl GameRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every game shipped in this crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ExampleGame::NAME, || Box::new(ExampleGame::new()));
        registry.register(SpiderGame::NAME, || Box::new(SpiderGame::new()));
        registry
    }

    /// Register a game. A later registration under the same name wins.
    pub fn register(&mut self, name: impl Into<String>, factory: GameFactory) {
        let name = name.into();
        if self.factories.contains_key(&name) {
            warn!(game = %name, "overriding existing game registration");
        }
        self.factories.insert(name, factory);
    }

    /// Create a new instance of the named game.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<Box<dyn Solitaire>> {
        self.factories.get(name).map(|factory| factory())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRegistry").field("games", &self.names()).finish()
    }
}
