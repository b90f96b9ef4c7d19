use std::collections::VecDeque;
use std::io;

use crate::controllers::session::ports::display::DisplayPort;
use crate::controllers::session::ports::input::InputPort;
use crate::core::data::cell_colour::CellColour;
use crate::core::data::command::Command;
use crate::core::data::grid_size::GridSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedCell {
    pub x: usize,
    pub y: usize,
    pub glyph: char,
    pub foreground: CellColour,
    pub background: CellColour,
}

/// In-memory display. `cells` holds what was set since the last `clear`.
pub struct RecordingDisplay {
    pub grid: GridSize,
    pub cells: Vec<RecordedCell>,
    pub clears: usize,
    pub flushes: usize,
    pub fail_flush: bool,
}

impl RecordingDisplay {
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            cells: Vec::new(),
            clears: 0,
            flushes: 0,
            fail_flush: false,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<RecordedCell> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.x == x && cell.y == y)
            .copied()
    }

    pub fn text_at_row(&self, y: usize) -> String {
        (0..self.grid.columns())
            .map(|x| self.cell(x, y).map_or(' ', |cell| cell.glyph))
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn grid_size(&mut self) -> io::Result<GridSize> {
        Ok(self.grid)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cells.clear();
        self.clears += 1;
        Ok(())
    }

    fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        glyph: char,
        foreground: CellColour,
        background: CellColour,
    ) -> io::Result<()> {
        self.cells.push(RecordedCell {
            x,
            y,
            glyph,
            foreground,
            background,
        });
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "display gone"));
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Replays a fixed command list, then reports end of input.
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }
}

impl InputPort for ScriptedInput {
    fn next_command(&mut self) -> io::Result<Command> {
        self.commands
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
