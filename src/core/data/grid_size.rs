use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("grid size must be at least 1x1: {columns}x{rows}")]
    InvalidSize { columns: usize, rows: usize },
}

/// Dimensions of the character grid, in cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    columns: usize,
    rows: usize,
}

impl GridSize {
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridSizeError> {
        if columns == 0 || rows == 0 {
            return Err(GridSizeError::InvalidSize { columns, rows });
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }
}
