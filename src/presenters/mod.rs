//! Display adapters for the explorer.

pub mod terminal;
