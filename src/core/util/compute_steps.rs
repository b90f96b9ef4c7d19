use crate::core::data::grid_size::GridSize;
use crate::core::data::step_vector::StepVector;
use crate::core::data::viewport::Viewport;

/// Height of one character cell divided by its width.
///
/// An 80x24 terminal of 800x504 pixels has 10x21 pixel cells.
pub const ASPECT: f64 = 2.1;

/// Computes the per-cell step sizes so that `radius` spans half of the
/// shorter effective axis and a circle stays circular on screen.
#[must_use]
pub fn compute_steps(viewport: &Viewport, grid: GridSize) -> StepVector {
    let columns = grid.columns() as f64;
    let rows = grid.rows() as f64;
    let span = 2.0 * viewport.radius();

    if rows > columns / ASPECT {
        let dx = span / columns;
        StepVector {
            dx,
            dy: dx * ASPECT,
        }
    } else {
        let dy = span / rows;
        StepVector {
            dx: dy / ASPECT,
            dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    const TOLERANCE: f64 = 1e-12;

    fn grid(columns: usize, rows: usize) -> GridSize {
        GridSize::new(columns, rows).unwrap()
    }

    #[test]
    fn test_wide_terminal_uses_rows_for_radius() {
        let steps = compute_steps(&Viewport::default(), grid(80, 24));

        assert!((steps.dy - 4.0 / 24.0).abs() < TOLERANCE);
        assert!((steps.dx / steps.dy - 1.0 / ASPECT).abs() < TOLERANCE);
        assert!((steps.dx * ASPECT - steps.dy).abs() < TOLERANCE);
    }

    #[test]
    fn test_tall_terminal_uses_columns_for_radius() {
        let steps = compute_steps(&Viewport::default(), grid(20, 60));

        assert!((steps.dx - 4.0 / 20.0).abs() < TOLERANCE);
        assert!((steps.dy / steps.dx - ASPECT).abs() < TOLERANCE);
    }

    #[test]
    fn test_steps_are_always_positive() {
        let viewports = [
            Viewport::default(),
            Viewport::new(Complex::new(-0.75, 0.1), 1e-9, 64).unwrap(),
            Viewport::new(Complex::new(3.0, -3.0), 1e6, 4096).unwrap(),
        ];
        let grids = [grid(1, 1), grid(1, 500), grid(500, 1), grid(80, 24), grid(21, 10)];

        for viewport in &viewports {
            for &grid in &grids {
                let steps = compute_steps(viewport, grid);
                assert!(steps.dx > 0.0, "dx not positive for {:?}", grid);
                assert!(steps.dy > 0.0, "dy not positive for {:?}", grid);
            }
        }
    }

    #[test]
    fn test_steps_scale_with_radius() {
        let near = Viewport::new(Complex::ZERO, 1.0, 256).unwrap();
        let far = Viewport::new(Complex::ZERO, 4.0, 256).unwrap();

        let near_steps = compute_steps(&near, grid(80, 24));
        let far_steps = compute_steps(&far, grid(80, 24));

        assert!((far_steps.dx - 4.0 * near_steps.dx).abs() < TOLERANCE);
        assert!((far_steps.dy - 4.0 * near_steps.dy).abs() < TOLERANCE);
    }
}
