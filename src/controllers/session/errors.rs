use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("display failed: {0}")]
    Display(#[source] io::Error),

    #[error("input failed: {0}")]
    Input(#[source] io::Error),
}
