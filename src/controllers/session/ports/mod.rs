//! Port definitions for the session controller.
//!
//! The controller paints through a `DisplayPort` and reads commands from an
//! `InputPort`; the terminal adapters implement both.

pub mod display;
pub mod input;
