//! Batched collection fetching.
//!
//! The collection endpoint caps one request at [`COLLECTION_MAX`]
//! identifiers, so longer deck lists are resolved as a sequence of batches.
//! Batches run strictly one after another — the per-call cap and the pause
//! between calls are both rate-limiting courtesies toward the API, so the
//! loop is deliberately not parallelized.

use std::time::Duration;

use scrydeck::{COLLECTION_MAX, Card, Identifier, ScryfallClient};
use tracing::{debug, info};

use crate::error::Result;

/// The default pause between consecutive collection requests.
const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Inter-batch pause policy.
///
/// The pause decision is a pure function of batch position, so batching
/// behavior can be tested without wall-clock sleeps; the fetch loop only
/// sleeps when [`pause_after`](Pacing::pause_after) says to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    interval: Option<Duration>,
}

impl Pacing {
    /// Pause for a fixed interval between consecutive batches.
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval: Some(interval),
        }
    }

    /// Never pause. Intended for tests and mock servers.
    pub fn none() -> Self {
        Self { interval: None }
    }

    /// The pause to take after `completed` of `total` batches have run.
    ///
    /// Returns `None` after the final batch — there is nothing left to
    /// space out.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use scrydeck_engine::Pacing;
    ///
    /// let pacing = Pacing::fixed(Duration::from_millis(100));
    /// assert_eq!(pacing.pause_after(1, 2), Some(Duration::from_millis(100)));
    /// assert_eq!(pacing.pause_after(2, 2), None);
    /// ```
    pub fn pause_after(&self, completed: usize, total: usize) -> Option<Duration> {
        if completed < total { self.interval } else { None }
    }
}

impl Default for Pacing {
    /// The API's courtesy interval: 100 ms between requests.
    fn default() -> Self {
        Self::fixed(DEFAULT_INTERVAL)
    }
}

/// Collection fetch workflow.
///
/// Obtained via [`Engine::fetch()`](crate::Engine::fetch).
#[derive(Debug)]
pub struct FetchEngine<'a> {
    client: &'a ScryfallClient,
    pacing: Pacing,
}

impl<'a> FetchEngine<'a> {
    pub(crate) fn new(client: &'a ScryfallClient, pacing: Pacing) -> Self {
        Self { client, pacing }
    }

    /// Override the pacing policy for this workflow.
    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Resolve an identifier sequence of any length to card records.
    ///
    /// The sequence is split into batches of [`COLLECTION_MAX`]; one request
    /// is issued per batch, sequentially and in order, pausing between
    /// consecutive batches per the pacing policy. Results concatenate in
    /// batch order, so the output follows the input ordering. Identifiers
    /// the API cannot match are omitted from the result.
    ///
    /// # Errors
    ///
    /// The first failing batch aborts the whole operation with the client
    /// error; no partial results are returned.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scrydeck_engine::{Engine, Identifier};
    ///
    /// # async fn example() -> scrydeck_engine::Result<()> {
    /// let engine = Engine::new();
    /// let cards = engine
    ///     .fetch()
    ///     .collection(&[Identifier::name("Lightning Bolt")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn collection(&self, identifiers: &[Identifier]) -> Result<Vec<Card>> {
        if identifiers.is_empty() {
            return Ok(Vec::new());
        }

        let total = identifiers.len().div_ceil(COLLECTION_MAX);
        let mut cards = Vec::with_capacity(identifiers.len());

        for (index, batch) in identifiers.chunks(COLLECTION_MAX).enumerate() {
            debug!(
                batch = index + 1,
                total,
                size = batch.len(),
                "requesting collection batch"
            );
            let found = self.client.cards().collection(batch).await?;
            cards.extend(found);

            if let Some(pause) = self.pacing.pause_after(index + 1, total) {
                tokio::time::sleep(pause).await;
            }
        }

        if cards.len() < identifiers.len() {
            debug!(
                requested = identifiers.len(),
                resolved = cards.len(),
                "some identifiers were not matched"
            );
        }
        info!(
            identifiers = identifiers.len(),
            cards = cards.len(),
            batches = total,
            "collection fetch complete"
        );
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacing_pauses_between_batches_only() {
        let pacing = Pacing::fixed(Duration::from_millis(100));

        assert_eq!(pacing.pause_after(1, 3), Some(Duration::from_millis(100)));
        assert_eq!(pacing.pause_after(2, 3), Some(Duration::from_millis(100)));
        assert_eq!(pacing.pause_after(3, 3), None);
    }

    #[test]
    fn test_pacing_single_batch_never_pauses() {
        assert_eq!(Pacing::default().pause_after(1, 1), None);
    }

    #[test]
    fn test_pacing_none() {
        assert_eq!(Pacing::none().pause_after(1, 2), None);
    }

    #[test]
    fn test_default_pacing_interval() {
        assert_eq!(
            Pacing::default().pause_after(1, 2),
            Some(Duration::from_millis(100))
        );
    }
}
