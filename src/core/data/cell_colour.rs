use crate::core::fractals::mandelbrot::palette::PALETTE_SIZE;

/// Colours a display cell can take. `Default` is the terminal's own
/// colour and is never used for fractal cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CellColour {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl CellColour {
    /// Display slots 1 to 8, in slot order.
    pub const PALETTE: [Self; PALETTE_SIZE as usize] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Maps a frame palette index to its display colour, skipping the
    /// `Default` slot. Indices wrap at the palette size.
    #[must_use]
    pub fn from_palette_index(index: u8) -> Self {
        Self::PALETTE[usize::from(index % PALETTE_SIZE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_first_palette_slot() {
        assert_eq!(CellColour::from_palette_index(0), CellColour::Black);
    }

    #[test]
    fn test_index_seven_is_last_palette_slot() {
        assert_eq!(CellColour::from_palette_index(7), CellColour::White);
    }

    #[test]
    fn test_palette_never_yields_default() {
        for index in 0..=u8::MAX {
            assert_ne!(CellColour::from_palette_index(index), CellColour::Default);
        }
    }

    #[test]
    fn test_palette_entries_are_unique() {
        for (i, colour) in CellColour::PALETTE.iter().enumerate() {
            for (j, other) in CellColour::PALETTE.iter().enumerate() {
                if i != j {
                    assert_ne!(colour, other, "Duplicate palette entry: {:?}", colour);
                }
            }
        }
    }
}
