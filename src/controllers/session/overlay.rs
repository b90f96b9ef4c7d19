use std::io;
use std::time::Duration;

use crate::controllers::session::ports::display::DisplayPort;
use crate::core::data::cell_colour::CellColour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;

pub const HELP_LINES: [&str; 8] = [
    "Terminal Mandelbrot explorer",
    "* Arrow keys to move",
    "* PgUp/PgDn/+/- to zoom",
    "* [/] to change depth",
    "* h toggle help on and off",
    "* i toggle info on and off",
    "* q/ESC/c-C to quit",
    "* r to reset to start",
];

#[must_use]
pub fn info_line(viewport: &Viewport, render_duration: Duration) -> String {
    format!(
        "c = {}, r = {}, Depth {}, rendered in {:?}",
        viewport.center(),
        viewport.radius(),
        viewport.depth(),
        render_duration
    )
}

/// Writes `text` left to right from `(x, y)`, dropping whatever falls
/// outside `grid`.
pub fn draw_text<D: DisplayPort>(
    display: &mut D,
    grid: GridSize,
    x: usize,
    y: usize,
    text: &str,
    foreground: CellColour,
    background: CellColour,
) -> io::Result<()> {
    if y >= grid.rows() {
        return Ok(());
    }

    for (offset, glyph) in text.chars().enumerate() {
        let column = x + offset;
        if column >= grid.columns() {
            break;
        }
        display.set_cell(column, y, glyph, foreground, background)?;
    }

    Ok(())
}

pub fn draw_help<D: DisplayPort>(display: &mut D, grid: GridSize) -> io::Result<()> {
    for (row, line) in HELP_LINES.iter().enumerate() {
        let foreground = if row == 0 {
            CellColour::Red
        } else {
            CellColour::Black
        };
        draw_text(display, grid, 0, row, line, foreground, CellColour::White)?;
    }

    Ok(())
}

pub fn draw_info<D: DisplayPort>(
    display: &mut D,
    grid: GridSize,
    viewport: &Viewport,
    render_duration: Duration,
) -> io::Result<()> {
    let line = info_line(viewport, render_duration);

    draw_text(
        display,
        grid,
        0,
        grid.rows() - 1,
        &line,
        CellColour::Black,
        CellColour::White,
    )
}
