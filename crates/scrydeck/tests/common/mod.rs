//! Common test utilities for Scryfall collection tests.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a successful collection response wrapping the given card objects.
pub fn collection_response(cards: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "object": "list",
        "not_found": [],
        "data": cards
    }))
}

/// Create an error response with a Scryfall-shaped payload.
#[allow(dead_code)] // Not all test files use this
pub fn api_error_response(status: u16, details: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "object": "error",
        "code": "bad_request",
        "status": status,
        "details": details
    }))
}

/// Mount a mock for the collection endpoint.
pub async fn mock_collection(server: &MockServer, response: ResponseTemplate, expect: u64) {
    Mock::given(method("POST"))
        .and(path("/cards/collection"))
        .respond_with(response)
        .expect(expect)
        .mount(server)
        .await;
}
