use crate::core::data::grid_size::GridSize;

/// A per-row computation over a fixed grid.
///
/// Rows are independent: `compute_row` must depend only on `y` and on
/// state fixed at construction, so rows can run in any order or concurrently.
pub trait FractalAlgorithm {
    type Success;

    fn grid_size(&self) -> GridSize;

    fn compute_row(&self, y: usize) -> Vec<Self::Success>;
}
