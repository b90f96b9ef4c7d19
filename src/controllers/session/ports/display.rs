use std::io;

use crate::core::data::cell_colour::CellColour;
use crate::core::data::grid_size::GridSize;

/// A character-cell surface the session paints frames onto.
pub trait DisplayPort {
    /// Current drawable size in cells, never smaller than 1x1.
    fn grid_size(&mut self) -> io::Result<GridSize>;

    fn clear(&mut self) -> io::Result<()>;

    fn set_cell(
        &mut self,
        x: usize,
        y: usize,
        glyph: char,
        foreground: CellColour,
        background: CellColour,
    ) -> io::Result<()>;

    /// Makes everything set since the last flush visible.
    fn flush(&mut self) -> io::Result<()>;
}
