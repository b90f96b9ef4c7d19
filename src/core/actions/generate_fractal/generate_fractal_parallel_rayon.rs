use rayon::ThreadPool;
use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Computes rows in parallel on `pool`.
///
/// Each row is one unit of work owning its own buffer. Rayon's indexed
/// collect places rows by index, so the output matches
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial)
/// whatever order the rows finish in. Blocks until every row is done.
pub fn generate_fractal_parallel_rayon<Alg>(
    pool: &ThreadPool,
    algorithm: &Alg,
) -> Vec<Vec<Alg::Success>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let rows = algorithm.grid_size().rows();

    pool.install(|| {
        (0..rows)
            .into_par_iter()
            .map(|y| algorithm.compute_row(y))
            .collect()
    })
}
