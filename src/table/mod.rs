//! Table layout, locations and command parsing.
//!
//! ## Key Types
//!
//! - `Table`: Foundations, tableau, deck and optional discard
//! - `Location`: One place on the table named by a command character
//! - `Move`: The locations of one command
//! - `parse_move`: Command string to `Move` for the current layout

pub mod layout;
pub mod location;

pub use layout::Table;
pub use location::{parse_move, tableau_letter, Location, Move};
