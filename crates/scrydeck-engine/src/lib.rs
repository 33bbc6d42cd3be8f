//! High-level deck-list lookup workflows for the Scryfall API.
//!
//! This crate builds the full deck-list flow on top of the [`scrydeck`]
//! client: parse a pasted deck list into lookup keys, resolve them in paced
//! batches, render the results, and drive the fetch/copy interaction over a
//! results panel.
//!
//! # Quick Start
//!
//! ```no_run
//! use scrydeck_engine::Engine;
//!
//! # async fn example() -> scrydeck_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let identifiers = scrydeck_engine::decklist::parse_decklist("4 Lightning Bolt\n2x Counterspell");
//! let cards = engine.fetch().collection(&identifiers).await?;
//! println!("Resolved {} cards", cards.len());
//! # Ok(())
//! # }
//! ```
//!
//! The interaction lifecycle (loading/error/empty panel states, the copy
//! cooldown) lives in [`session::Session`]:
//!
//! ```no_run
//! use scrydeck_engine::{Engine, Session};
//! # use scrydeck_engine::{Clipboard, ClipboardError};
//! # struct NoClipboard;
//! # impl Clipboard for NoClipboard {
//! #     fn set_text(&mut self, _: &str) -> Result<(), ClipboardError> { Ok(()) }
//! # }
//!
//! # async fn example() {
//! let mut session = Session::new(Engine::new(), NoClipboard);
//! session.fetch("1 Brainstorm").await;
//! println!("{}", session.panel().html());
//! # }
//! ```

pub mod clipboard;
pub mod decklist;
mod error;
pub mod fetch;
pub mod panel;
pub mod render;
pub mod session;

pub use clipboard::{Clipboard, ClipboardError};
pub use error::{Error, Result};
pub use fetch::{FetchEngine, Pacing};
pub use panel::{Panel, PanelState};
pub use session::{CopyOutcome, Session};

// Re-export scrydeck types for convenience
pub use scrydeck::{COLLECTION_MAX, Card, ClientBuilder, Identifier, ScryfallClient};

/// High-level workflow engine for deck-list lookups.
///
/// The engine wraps a [`ScryfallClient`] together with the pacing policy its
/// fetch workflows observe between batches.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use scrydeck_engine::{Engine, Pacing};
///
/// // Default client, default 100 ms pacing
/// let engine = Engine::new();
///
/// // Custom client and pacing
/// let client = scrydeck_engine::ScryfallClient::builder()
///     .url("https://api.scryfall.com")
///     .build();
/// let engine = Engine::from_client(client).with_pacing(Pacing::fixed(Duration::from_millis(250)));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    client: ScryfallClient,
    pacing: Pacing,
}

impl Engine {
    /// Create a new engine with default client settings.
    pub fn new() -> Self {
        Self::from_client(ScryfallClient::new())
    }

    /// Create an engine from an existing client.
    pub fn from_client(client: ScryfallClient) -> Self {
        Self {
            client,
            pacing: Pacing::default(),
        }
    }

    /// Set the inter-batch pacing policy used by fetch workflows.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &ScryfallClient {
        &self.client
    }

    /// Access the batched collection fetch workflow.
    pub fn fetch(&self) -> FetchEngine<'_> {
        FetchEngine::new(&self.client, self.pacing)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
