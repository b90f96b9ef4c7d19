use std::num::NonZeroUsize;

use crate::core::data::grid_size::GridSize;

#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Number of workers that can be kept busy on `grid` when rows are the
/// unit of work: never more than the pool holds, never more than the rows.
#[must_use]
pub fn calculate_workers_for_grid(max_workers: NonZeroUsize, grid: GridSize) -> NonZeroUsize {
    NonZeroUsize::new(grid.rows().min(max_workers.get())).unwrap_or(NonZeroUsize::MIN)
}
