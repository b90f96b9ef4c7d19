use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;

pub const PALETTE_SIZE: u8 = 8;

/// Reduces an escape count to a palette index in `0..PALETTE_SIZE`.
#[must_use]
pub fn palette_index(count: u32) -> u8 {
    // The remainder is below PALETTE_SIZE, so the cast is lossless.
    (count % u32::from(PALETTE_SIZE)) as u8
}

/// Wraps an escape-count algorithm so each row comes out as palette indices.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteIndexed<Alg> {
    inner: Alg,
}

impl<Alg> PaletteIndexed<Alg> {
    #[must_use]
    pub fn new(inner: Alg) -> Self {
        Self { inner }
    }
}

impl<Alg> FractalAlgorithm for PaletteIndexed<Alg>
where
    Alg: FractalAlgorithm<Success = u32>,
{
    type Success = u8;

    fn grid_size(&self) -> GridSize {
        self.inner.grid_size()
    }

    fn compute_row(&self, y: usize) -> Vec<u8> {
        self.inner
            .compute_row(y)
            .into_iter()
            .map(palette_index)
            .collect()
    }
}
