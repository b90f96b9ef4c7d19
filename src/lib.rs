pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::{Config, LogLevel};
pub use controllers::session::{
    DisplayPort, DisplayToggles, InputPort, SessionController, SessionError,
};
pub use crate::core::actions::render_frame::{FrameRenderer, render_frame_serial};
pub use crate::core::data::viewport::Viewport;
pub use input::terminal::TerminalInput;
pub use presenters::terminal::TerminalPresenter;
