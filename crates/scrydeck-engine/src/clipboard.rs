//! The clipboard seam for the copy action.
//!
//! The session writes through this trait so the copy flow runs anywhere: the
//! CLI backs it with the system clipboard (`arboard`), tests with an
//! in-memory buffer.

use thiserror::Error;

/// Error from a clipboard write.
///
/// Common causes: no display server on headless Linux, permission denied.
/// The session logs these and keeps the copy action usable; they never
/// surface as a user-visible error state.
#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(String);

impl ClipboardError {
    /// Create an error from any displayable cause.
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

/// Destination of the copy action.
pub trait Clipboard {
    /// Write `text`, replacing the current clipboard contents.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
