//! The Scryfall client and builder.

use std::time::Duration;

use reqwest::Client;

use crate::actions::CardActions;
use crate::error::{Error, Result};
use crate::request::{ApiErrorBody, CollectionRequest, CollectionResponse};
use crate::types::{Card, Identifier};

/// Default URL for the Scryfall API.
const DEFAULT_URL: &str = "https://api.scryfall.com";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for the Scryfall API.
///
/// # Example
///
/// ```no_run
/// use scrydeck::{Identifier, ScryfallClient};
///
/// # async fn example() -> scrydeck::Result<()> {
/// // Create a client with default settings
/// let client = ScryfallClient::new();
///
/// let cards = client
///     .cards()
///     .collection(&[Identifier::name("Counterspell")])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http_client: Client,
    base_url: String,
}

impl ScryfallClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `https://api.scryfall.com` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Send one collection request and process the response.
    ///
    /// The identifier cap is enforced by the caller ([`CardActions`]).
    pub(crate) async fn send_collection(&self, identifiers: &[Identifier]) -> Result<Vec<Card>> {
        let request = CollectionRequest { identifiers };

        let response = self
            .http_client
            .post(format!("{}/cards/collection", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.details)
                .unwrap_or_else(|_| "no error details".to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                details,
            });
        }

        let collection: CollectionResponse = response.json().await?;
        Ok(collection.data)
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`ScryfallClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use scrydeck::ScryfallClient;
///
/// let client = ScryfallClient::builder()
///     .url("https://api.scryfall.com")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://api.scryfall.com`. A trailing slash is trimmed.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> ScryfallClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        ScryfallClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
