//! Error types for scrydeck-engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during engine workflows.
///
/// Fetch workflows fail only the way the client fails; an API-level failure
/// in any batch aborts the whole operation. Clipboard failures never appear
/// here — the session logs them and reports a [`CopyOutcome`] instead.
///
/// [`CopyOutcome`]: crate::session::CopyOutcome
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying scrydeck client.
    #[error(transparent)]
    Client(#[from] scrydeck::Error),
}
