//! Error types for flyon-vdom.
//!
//! Building components never fails; the only failure is the sink refusing
//! bytes while rendering.

use thiserror::Error;

/// Errors that can occur while rendering markup.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output sink rejected a write
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

impl RenderError {
    /// Kind of the underlying I/O failure.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io(err) => err.kind(),
        }
    }
}
