use std::io;

use crate::core::data::command::Command;

pub trait InputPort {
    /// Blocks until the next input event and returns its command.
    fn next_command(&mut self) -> io::Result<Command>;
}
