//! Input adapters for the explorer.
//!
//! These receive raw events from the outside world and translate them into
//! session commands.

pub mod terminal;
