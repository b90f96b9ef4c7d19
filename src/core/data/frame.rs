use crate::core::data::grid_size::GridSize;

/// One rendered grid of palette indices, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    grid: GridSize,
    cells: Vec<u8>,
}

impl Frame {
    /// Assembles a frame from rows given in top-to-bottom order. Every row
    /// must be `grid.columns()` wide and there must be `grid.rows()` of them.
    pub(crate) fn from_grid_rows(grid: GridSize, rows: Vec<Vec<u8>>) -> Self {
        debug_assert_eq!(rows.len(), grid.rows());
        debug_assert!(rows.iter().all(|row| row.len() == grid.columns()));

        let mut cells = Vec::with_capacity(grid.cell_count());
        for row in rows {
            cells.extend(row);
        }

        Self { grid, cells }
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if !self.grid.contains(x, y) {
            return None;
        }

        Some(self.cells[y * self.grid.columns() + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.grid.columns())
    }
}
