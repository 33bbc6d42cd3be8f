//! Error types for the scrydeck crate.
//!
//! The most common errors you'll encounter are:
//!
//! - [`Error::Api`]: Scryfall rejected the request (bad identifier shape,
//!   malformed body, rate limiting)
//! - [`Error::ConnectionRefused`]: the API host could not be reached
//! - [`Error::TooManyIdentifiers`]: a single collection call exceeded the
//!   per-request cap
//!
//! # Example
//!
//! ```no_run
//! use scrydeck::{Error, Identifier, ScryfallClient};
//!
//! # async fn example() {
//! let client = ScryfallClient::new();
//!
//! match client.cards().collection(&[Identifier::name("Island")]).await {
//!     Ok(cards) => println!("Resolved {} cards", cards.len()),
//!     Err(Error::Api { status, details }) => {
//!         eprintln!("Scryfall responded with {}: {}", status, details);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for Scryfall operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Typically indicates transport issues unrelated to the API itself.
    /// For connection issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Scryfall returned a non-success status.
    ///
    /// Carries the HTTP status and the `details` string from the error
    /// payload. No card data accompanies this error; the whole request
    /// failed.
    #[error("Scryfall API responded with status {status}: {details}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The `details` message from the error payload.
        details: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - the API host could not be reached.
    #[error("Could not connect to the Scryfall API. Check the URL and your network.")]
    ConnectionRefused,

    /// More identifiers than one collection request may carry.
    ///
    /// The endpoint accepts at most [`COLLECTION_MAX`](crate::COLLECTION_MAX)
    /// entries per call. No request is issued when this is returned.
    #[error("collection request carries {} identifiers (max {})", .count, crate::COLLECTION_MAX)]
    TooManyIdentifiers {
        /// The number of identifiers passed.
        count: usize,
    },
}

/// A specialized Result type for Scryfall operations.
pub type Result<T> = std::result::Result<T, Error>;
