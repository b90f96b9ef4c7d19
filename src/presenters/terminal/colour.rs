use crossterm::style::Color;

use crate::core::data::cell_colour::CellColour;

/// The basic eight ANSI colours, so every terminal shows the same palette.
#[must_use]
pub fn to_terminal_colour(colour: CellColour) -> Color {
    match colour {
        CellColour::Default => Color::Reset,
        CellColour::Black => Color::Black,
        CellColour::Red => Color::DarkRed,
        CellColour::Green => Color::DarkGreen,
        CellColour::Yellow => Color::DarkYellow,
        CellColour::Blue => Color::DarkBlue,
        CellColour::Magenta => Color::DarkMagenta,
        CellColour::Cyan => Color::DarkCyan,
        CellColour::White => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_to_reset() {
        assert_eq!(to_terminal_colour(CellColour::Default), Color::Reset);
    }

    #[test]
    fn test_palette_colours_are_distinct() {
        let colours: Vec<Color> = CellColour::PALETTE
            .iter()
            .map(|&colour| to_terminal_colour(colour))
            .collect();

        for (i, a) in colours.iter().enumerate() {
            assert_ne!(*a, Color::Reset);
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
