use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::step_vector::StepVector;
use crate::core::data::viewport::Viewport;
use crate::core::util::compute_steps::compute_steps;

/// Squared escape radius. Once `|z| >= 2` the orbit diverges.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Returns the zero-based iteration at which the orbit of `c` leaves the
/// radius-2 disc, or `depth` if it stays inside for `depth` iterations.
#[must_use]
pub fn escape_count(c: Complex, depth: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..depth {
        z = z * z + c;
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    depth
}

/// Escape counts for every cell of a grid looking at one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    grid: GridSize,
    center: Complex,
    origin: Complex,
    steps: StepVector,
    depth: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: &Viewport, grid: GridSize) -> Self {
        let steps = compute_steps(viewport, grid);
        let center = viewport.center();
        let half_columns = (grid.columns() / 2) as f64;
        let half_rows = (grid.rows() / 2) as f64;

        let origin = Complex {
            real: center.real - half_columns * steps.dx,
            imag: center.imag - half_rows * steps.dy,
        };

        Self {
            grid,
            center,
            origin,
            steps,
            depth: viewport.depth(),
        }
    }

    #[must_use]
    pub fn steps(&self) -> StepVector {
        self.steps
    }

    /// The sample point for the top-left cell.
    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn grid_size(&self) -> GridSize {
        self.grid
    }

    fn compute_row(&self, y: usize) -> Vec<u32> {
        let center_row = (self.grid.rows() / 2) as f64;
        let fy = self.center.imag + self.steps.dy * (y as f64 - center_row);
        let mut fx = self.origin.real;
        let mut row = Vec::with_capacity(self.grid.columns());

        for _ in 0..self.grid.columns() {
            row.push(escape_count(Complex::new(fx, fy), self.depth));
            fx += self.steps.dx;
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_count(Complex::ZERO, 64), 64);
        assert_eq!(escape_count(Complex::ZERO, 256), 256);
        assert_eq!(escape_count(Complex::ZERO, 1), 1);
    }

    #[test]
    fn test_points_outside_radius_two_escape_immediately() {
        let points = [
            Complex::new(2.5, 0.0),
            Complex::new(-3.0, 0.0),
            Complex::new(0.0, 2.01),
            Complex::new(-1.6, -2.0),
            Complex::new(100.0, 100.0),
        ];

        for c in points {
            for depth in [1, 2, 64, 1024] {
                assert_eq!(escape_count(c, depth), 0, "c = {}", c);
            }
        }
    }

    #[test]
    fn test_counts_stay_within_depth() {
        for i in -20..=20 {
            for j in -20..=20 {
                let c = Complex::new(f64::from(i) * 0.1, f64::from(j) * 0.1);
                for depth in [1, 7, 64] {
                    let count = escape_count(c, depth);
                    assert!(count <= depth, "count {} > depth {} at {}", count, depth, c);
                }
            }
        }
    }

    #[test]
    fn test_known_interior_points() {
        // Main cardioid and period-2 bulb
        assert_eq!(escape_count(Complex::new(-0.1, 0.1), 500), 500);
        assert_eq!(escape_count(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn test_known_exterior_point() {
        // 1 -> 2 -> 5: |z| first reaches 2 on the second update
        assert_eq!(escape_count(Complex::new(1.0, 0.0), 256), 1);
    }

    #[test]
    fn test_center_cell_samples_viewport_center() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.25), 1.0, 64).unwrap();
        let grid = GridSize::new(80, 24).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&viewport, grid);
        let steps = algorithm.steps();

        let center_x = algorithm.origin().real + 40.0 * steps.dx;
        let center_y = algorithm.origin().imag + 12.0 * steps.dy;

        assert!((center_x - -0.5).abs() < 1e-12);
        assert!((center_y - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_compute_row_has_grid_width() {
        let grid = GridSize::new(17, 5).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&Viewport::default(), grid);

        for y in 0..5 {
            assert_eq!(algorithm.compute_row(y).len(), 17);
        }
    }

    #[test]
    fn test_compute_row_matches_escape_count() {
        let grid = GridSize::new(9, 7).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&Viewport::default(), grid);
        let steps = algorithm.steps();

        let row = algorithm.compute_row(1);
        let fy = steps.dy * (1.0 - 3.0);
        let mut fx = algorithm.origin().real;

        for &count in &row {
            let expected = escape_count(Complex::new(fx, fy), 256);
            assert_eq!(count, expected);
            fx += steps.dx;
        }
    }
}
