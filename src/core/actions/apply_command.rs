use crate::core::data::command::Command;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Fraction of the radius moved per pan.
pub const PAN: f64 = 0.2;

/// Radius factor per zoom step.
pub const ZOOM: f64 = 2.0;

/// Returns the viewport that results from `command`.
///
/// Toggles, `Quit` and `NoOp` leave the viewport unchanged; the session
/// loop interprets them.
#[must_use]
pub fn apply_command(viewport: Viewport, command: Command) -> Viewport {
    let center = viewport.center();
    let pan = viewport.radius() * PAN;

    match command {
        Command::PanUp => viewport.with_center(center + Complex::new(0.0, -pan)),
        Command::PanDown => viewport.with_center(center + Complex::new(0.0, pan)),
        Command::PanLeft => viewport.with_center(center + Complex::new(-pan, 0.0)),
        Command::PanRight => viewport.with_center(center + Complex::new(pan, 0.0)),
        Command::ZoomIn => viewport.with_radius(viewport.radius() / ZOOM),
        Command::ZoomOut => viewport.with_radius(viewport.radius() * ZOOM),
        Command::DepthIncrease => viewport.with_depth(viewport.depth().saturating_mul(2)),
        Command::DepthDecrease => viewport.with_depth(viewport.depth() / 2),
        Command::Reset => Viewport::default(),
        Command::ToggleHelp | Command::ToggleInfo | Command::Quit | Command::NoOp => viewport,
    }
}
