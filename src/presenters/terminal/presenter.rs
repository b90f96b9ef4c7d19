use std::io::{self, Stdout, Write, stdout};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};

use crate::controllers::session::ports::display::DisplayPort;
use crate::core::data::cell_colour::CellColour;
use crate::core::data::grid_size::GridSize;
use crate::presenters::terminal::colour::to_terminal_colour;
use crate::presenters::terminal::guard::TerminalGuard;

type SizeSource = Box<dyn FnMut() -> io::Result<(u16, u16)>>;

/// Paints cells by queueing crossterm commands, written out on `flush`.
pub struct TerminalPresenter<W: Write = Stdout> {
    out: W,
    size: SizeSource,
    current: Option<(CellColour, CellColour)>,
    // Dropped last so the screen is restored after the final write.
    _guard: Option<TerminalGuard>,
}

impl TerminalPresenter<Stdout> {
    /// Takes over the controlling terminal until the presenter is dropped.
    pub fn new() -> io::Result<Self> {
        let guard = TerminalGuard::acquire()?;

        Ok(Self {
            out: stdout(),
            size: Box::new(terminal::size),
            current: None,
            _guard: Some(guard),
        })
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// A presenter over any writer with a fixed size source. Leaves the
    /// real terminal untouched.
    pub fn with_writer(out: W, size: impl FnMut() -> io::Result<(u16, u16)> + 'static) -> Self {
        Self {
            out,
            size: Box::new(size),
            current: None,
            _guard: None,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

fn to_position(value: usize, axis: &str) -> io::Result<u16> {
    u16::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{axis} {value} is beyond the terminal range"),
        )
    })
}

impl<W: Write> DisplayPort for TerminalPresenter<W> {
    fn grid_size(&mut self) -> io::Result<GridSize> {
        let (columns, rows) = (self.size)()?;
        let columns = usize::from(columns.max(1));
        let rows = usize::from(rows.max(1));

        GridSize::new(columns, rows)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(Clear(ClearType::All))?;
        self.current = None;
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
        let column = to_position(x, "column")?;
        let row = to_position(y, "row")?;

        self.out.queue(MoveTo(column, row))?;

        if self.current != Some((foreground, background)) {
            self.out.queue(SetForegroundColor(to_terminal_colour(foreground)))?;
            self.out.queue(SetBackgroundColor(to_terminal_colour(background)))?;
            self.current = Some((foreground, background));
        }

        self.out.queue(Print(glyph))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
