use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::controllers::session::errors::SessionError;
use crate::controllers::session::overlay::{draw_help, draw_info};
use crate::controllers::session::ports::display::DisplayPort;
use crate::controllers::session::ports::input::InputPort;
use crate::core::actions::apply_command::apply_command;
use crate::core::actions::render_frame::FrameRenderer;
use crate::core::data::cell_colour::CellColour;
use crate::core::data::command::Command;
use crate::core::data::frame::Frame;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayToggles {
    pub show_help: bool,
    pub show_info: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_help: true,
            show_info: true,
        }
    }
}

impl DisplayToggles {
    #[must_use]
    pub fn toggled(self, command: Command) -> Self {
        match command {
            Command::ToggleHelp => Self {
                show_help: !self.show_help,
                ..self
            },
            Command::ToggleInfo => Self {
                show_info: !self.show_info,
                ..self
            },
            _ => self,
        }
    }
}

/// Drives one interactive session: render, paint, wait for a command,
/// apply it, until `Quit`.
pub struct SessionController<D: DisplayPort, I: InputPort> {
    display: D,
    input: I,
    renderer: FrameRenderer,
    viewport: Viewport,
    toggles: DisplayToggles,
}

impl<D: DisplayPort, I: InputPort> SessionController<D, I> {
    pub fn new(
        display: D,
        input: I,
        renderer: FrameRenderer,
        viewport: Viewport,
        toggles: DisplayToggles,
    ) -> Self {
        Self {
            display,
            input,
            renderer,
            viewport,
            toggles,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn toggles(&self) -> DisplayToggles {
        self.toggles
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn run(&mut self) -> Result<(), SessionError> {
        let grid = self.display.grid_size().map_err(SessionError::Display)?;
        info!(
            columns = grid.columns(),
            rows = grid.rows(),
            workers = self.renderer.workers().get(),
            center = %self.viewport.center(),
            radius = self.viewport.radius(),
            depth = self.viewport.depth(),
            "session started"
        );

        loop {
            self.draw()?;

            let command = self.input.next_command().map_err(SessionError::Input)?;
            trace!(?command, "command received");

            if !self.handle(command) {
                break;
            }
        }

        info!(
            workers = self.renderer.workers().get(),
            center = %self.viewport.center(),
            radius = self.viewport.radius(),
            depth = self.viewport.depth(),
            "session stopped"
        );

        Ok(())
    }

    /// Applies one command. Returns `false` when the session should end.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => false,
            Command::ToggleHelp | Command::ToggleInfo => {
                self.toggles = self.toggles.toggled(command);
                true
            }
            _ => {
                self.viewport = apply_command(self.viewport, command);
                true
            }
        }
    }

    pub fn draw(&mut self) -> Result<(), SessionError> {
        let grid = self.display.grid_size().map_err(SessionError::Display)?;

        let start = Instant::now();
        let frame = self.renderer.render(&self.viewport, grid);
        let render_duration = start.elapsed();

        debug!(
            center = %self.viewport.center(),
            radius = self.viewport.radius(),
            depth = self.viewport.depth(),
            columns = grid.columns(),
            rows = grid.rows(),
            ?render_duration,
            "frame rendered"
        );

        self.paint(&frame, render_duration).map_err(SessionError::Display)
    }

    fn paint(&mut self, frame: &Frame, render_duration: Duration) -> std::io::Result<()> {
        let grid = frame.grid_size();

        self.display.clear()?;

        for (y, row) in frame.rows().enumerate() {
            for (x, &index) in row.iter().enumerate() {
                self.display.set_cell(
                    x,
                    y,
                    ' ',
                    CellColour::Default,
                    CellColour::from_palette_index(index),
                )?;
            }
        }

        if self.toggles.show_help {
            draw_help(&mut self.display, grid)?;
        }

        if self.toggles.show_info {
            draw_info(&mut self.display, grid, &self.viewport, render_duration)?;
        }

        self.display.flush()
    }
}
