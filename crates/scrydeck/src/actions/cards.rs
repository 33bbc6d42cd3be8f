//! Card-related Scryfall actions.
//!
//! This module provides the bulk name-lookup operation backing deck-list
//! resolution. One request resolves up to [`COLLECTION_MAX`] names at once.

use crate::client::ScryfallClient;
use crate::error::{Error, Result};
use crate::types::{Card, Identifier};

/// Maximum identifiers per collection request, per the API's documented cap.
pub const COLLECTION_MAX: usize = 75;

/// Provides access to card-related Scryfall operations.
///
/// Obtained via [`ScryfallClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> CardActions<'a> {
    /// Resolve a batch of identifiers to card records.
    ///
    /// Issues one `POST /cards/collection` request. The returned records are
    /// in request order; identifiers the API could not match are silently
    /// omitted. At most [`COLLECTION_MAX`] identifiers may be passed —
    /// longer sequences must be split into multiple sequential calls (the
    /// `scrydeck-engine` crate does this).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyIdentifiers`] without issuing a request when
    /// the batch exceeds the cap, and [`Error::Api`] with the payload's
    /// `details` on any non-success status. An API-level failure yields no
    /// partial results.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use scrydeck::{Identifier, ScryfallClient};
    /// # async fn example() -> scrydeck::Result<()> {
    /// let client = ScryfallClient::new();
    ///
    /// let cards = client
    ///     .cards()
    ///     .collection(&[
    ///         Identifier::name("Lightning Bolt"),
    ///         Identifier::name("Counterspell"),
    ///     ])
    ///     .await?;
    ///
    /// for card in cards {
    ///     println!("{} — {}", card.name, card.type_line);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn collection(&self, identifiers: &[Identifier]) -> Result<Vec<Card>> {
        if identifiers.len() > COLLECTION_MAX {
            return Err(Error::TooManyIdentifiers {
                count: identifiers.len(),
            });
        }
        self.client.send_collection(identifiers).await
    }
}
