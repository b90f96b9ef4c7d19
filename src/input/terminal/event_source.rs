use std::io;

use crossterm::event;

use crate::controllers::session::ports::input::InputPort;
use crate::core::data::command::Command;
use crate::input::terminal::keymap::command_for_event;

/// Blocking reader of terminal events. Needs raw mode, which the terminal
/// presenter's guard provides.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InputPort for TerminalInput {
    fn next_command(&mut self) -> io::Result<Command> {
        let event = event::read()?;
        Ok(command_for_event(&event))
    }
}
