//! An async Rust client for the Scryfall card collection API.
//!
//! This crate provides typed access to Scryfall's bulk name-lookup endpoint,
//! resolving card names to full card records in batches.
//!
//! # Quick Start
//!
//! ```no_run
//! use scrydeck::{Identifier, ScryfallClient};
//!
//! # async fn example() -> scrydeck::Result<()> {
//! // Create a client with default settings (api.scryfall.com)
//! let client = ScryfallClient::new();
//!
//! let cards = client
//!     .cards()
//!     .collection(&[Identifier::name("Lightning Bolt")])
//!     .await?;
//! println!("Resolved {} cards", cards.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use scrydeck::ScryfallClient;
//!
//! let client = ScryfallClient::builder()
//!     .url("https://api.scryfall.com")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Batching
//!
//! The collection endpoint accepts at most [`COLLECTION_MAX`] identifiers per
//! request. Passing more is an error; callers with longer lists issue several
//! sequential requests (see the `scrydeck-engine` crate, which handles the
//! chunking and pacing).

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use actions::{COLLECTION_MAX, CardActions};
pub use client::{ClientBuilder, ScryfallClient};
pub use error::{Error, Result};
pub use types::{Card, Identifier};
