//! Interactive session over a character-cell display.
//!
//! The controller owns the viewport and overlay toggles, and talks to the
//! outside world only through the `DisplayPort` and `InputPort` traits.

mod controller;
pub mod errors;
pub mod overlay;
pub mod ports;
#[cfg(test)]
mod test_support;

pub use controller::{DisplayToggles, SessionController};
pub use errors::SessionError;
pub use ports::display::DisplayPort;
pub use ports::input::InputPort;
