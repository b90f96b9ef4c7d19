use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Computes every row on the calling thread, top to bottom.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Vec<Alg::Success>> {
    (0..algorithm.grid_size().rows())
        .map(|y| algorithm.compute_row(y))
        .collect()
}
