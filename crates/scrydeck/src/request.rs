//! Internal request and response types for the collection endpoint.

use serde::{Deserialize, Serialize};

use crate::types::{Card, Identifier};

/// The request body for `POST /cards/collection`.
#[derive(Debug, Serialize)]
pub(crate) struct CollectionRequest<'a> {
    /// The lookup keys, at most 75 per request.
    pub identifiers: &'a [Identifier],
}

/// The success response for a collection request.
///
/// Unmatched identifiers are listed under `not_found` by the API; they are
/// omitted from `data` and not surfaced to callers.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionResponse {
    /// The card records that were found, in request order.
    #[serde(default)]
    pub data: Vec<Card>,
}

/// The error payload accompanying a non-success status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    /// Human-readable description of what went wrong.
    #[serde(default)]
    pub details: String,
}
