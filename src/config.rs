use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::actions::render_frame::{FrameRenderer, RendererError};
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{DEFAULT_DEPTH, DEFAULT_RADIUS, Viewport, ViewportError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore the Mandelbrot set in your terminal")]
pub struct Config {
    /// Real part of the starting center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_re: f64,

    /// Imaginary part of the starting center
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_im: f64,

    /// Starting half-height of the view in the complex plane
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Starting iteration limit
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u32,

    /// Render threads (defaults to the available parallelism)
    #[arg(long)]
    pub workers: Option<NonZeroUsize>,

    /// Start with the help legend hidden
    #[arg(long)]
    pub hide_help: bool,

    /// Start with the info line hidden
    #[arg(long)]
    pub hide_info: bool,

    /// Write logs to this file (nothing is logged without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Config {
    pub fn initial_viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(
            Complex::new(self.center_re, self.center_im),
            self.radius,
            self.depth,
        )
    }

    pub fn renderer(&self) -> Result<FrameRenderer, RendererError> {
        FrameRenderer::new(self.workers)
    }
}
