//! Crossterm-backed display for the session controller.

pub mod colour;
pub mod guard;
pub mod presenter;

pub use guard::TerminalGuard;
pub use presenter::TerminalPresenter;
