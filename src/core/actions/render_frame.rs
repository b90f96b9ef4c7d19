use std::num::NonZeroUsize;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;
use tracing::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::frame::Frame;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::palette::PaletteIndexed;
use crate::core::util::calculate_workers_for_grid::{available_workers, calculate_workers_for_grid};

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to start {workers} render workers: {source}")]
    ThreadPool {
        workers: usize,
        #[source]
        source: ThreadPoolBuildError,
    },
}

/// Renders viewports into frames of palette indices on a fixed-size
/// worker pool that lives as long as the renderer.
pub struct FrameRenderer {
    pool: ThreadPool,
    workers: NonZeroUsize,
}

impl FrameRenderer {
    /// Starts `workers` render threads, or one per available core when `None`.
    pub fn new(workers: Option<NonZeroUsize>) -> Result<Self, RendererError> {
        let workers = workers.unwrap_or_else(available_workers);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|index| format!("render-{index}"))
            .build()
            .map_err(|source| RendererError::ThreadPool {
                workers: workers.get(),
                source,
            })?;

        Ok(Self { pool, workers })
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    #[must_use]
    pub fn render(&self, viewport: &Viewport, grid: GridSize) -> Frame {
        let algorithm = PaletteIndexed::new(MandelbrotAlgorithm::new(viewport, grid));
        let busy_workers = calculate_workers_for_grid(self.workers, grid);

        debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            workers = busy_workers.get(),
            "rendering frame"
        );

        let rows = if busy_workers.get() == 1 {
            generate_fractal_serial(&algorithm)
        } else {
            generate_fractal_parallel_rayon(&self.pool, &algorithm)
        };

        Frame::from_grid_rows(grid, rows)
    }
}

/// Renders on the calling thread only. Reference for the pooled renderer.
#[must_use]
pub fn render_frame_serial(viewport: &Viewport, grid: GridSize) -> Frame {
    let algorithm = PaletteIndexed::new(MandelbrotAlgorithm::new(viewport, grid));

    Frame::from_grid_rows(grid, generate_fractal_serial(&algorithm))
}
