//! Crossterm-backed input for the session controller.

pub mod event_source;
pub mod keymap;

pub use event_source::TerminalInput;
pub use keymap::command_for_event;
