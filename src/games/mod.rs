//! Built-in games.
//!
//! Each game composes piles with its own criteria, deals the table, and
//! interprets commands through the `Solitaire` trait.

pub mod example;
pub mod spider;

pub use example::ExampleGame;
pub use spider::SpiderGame;
