use thiserror::Error;

use crate::core::data::complex::Complex;

pub const MIN_DEPTH: u32 = 64;
pub const DEFAULT_DEPTH: u32 = 256;
pub const DEFAULT_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport center must be finite: {center}")]
    NonFiniteCenter { center: Complex },
    #[error("viewport radius must be positive and finite: {radius}")]
    InvalidRadius { radius: f64 },
    #[error("iteration depth {depth} is below the minimum of {min}")]
    DepthTooShallow { depth: u32, min: u32 },
}

/// The visible region of the complex plane plus the iteration bound.
///
/// `radius` is the half-extent along the shorter effective screen axis.
/// Values are replaced wholesale on every command rather than mutated, and
/// every replacement keeps the center finite and the radius positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    radius: f64,
    depth: u32,
}

impl Viewport {
    pub fn new(center: Complex, radius: f64, depth: u32) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center });
        }

        if !(radius.is_finite() && radius > 0.0) {
            return Err(ViewportError::InvalidRadius { radius });
        }

        if depth < MIN_DEPTH {
            return Err(ViewportError::DepthTooShallow {
                depth,
                min: MIN_DEPTH,
            });
        }

        Ok(Self {
            center,
            radius,
            depth,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Moves to `center`, or stays put if it is not finite.
    #[must_use]
    pub(crate) fn with_center(self, center: Complex) -> Self {
        if !center.is_finite() {
            return self;
        }

        Self { center, ..self }
    }

    /// Rescales to `radius`, or stays put if it is not positive and finite.
    #[must_use]
    pub(crate) fn with_radius(self, radius: f64) -> Self {
        if !(radius.is_finite() && radius > 0.0) {
            return self;
        }

        Self { radius, ..self }
    }

    #[must_use]
    pub(crate) fn with_depth(self, depth: u32) -> Self {
        Self {
            depth: depth.max(MIN_DEPTH),
            ..self
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            radius: DEFAULT_RADIUS,
            depth: DEFAULT_DEPTH,
        }
    }
}
