//! Common test utilities for scrydeck-engine workflow tests.

use scrydeck_engine::{Engine, Pacing};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create an Engine connected to the mock server, with pacing disabled.
pub fn engine_for_mock(server: &MockServer) -> Engine {
    let client = scrydeck_engine::ClientBuilder::new()
        .url(server.uri())
        .build();
    Engine::from_client(client).with_pacing(Pacing::none())
}

/// A minimal card object for mock response bodies.
pub fn card_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "card",
        "name": name,
        "type_line": "Instant"
    })
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

/// Mount a mock for the collection endpoint with an expected call count.
pub async fn mock_collection(server: &MockServer, response: ResponseTemplate, expect: u64) {
    Mock::given(method("POST"))
        .and(path("/cards/collection"))
        .respond_with(response)
        .expect(Times::from(expect))
        .mount(server)
        .await;
}

/// Mount a mock for the collection endpoint that answers a single call and
/// then retires, so later calls fall through to the next mounted mock.
#[allow(dead_code)] // Not all test files use this
pub async fn mock_collection_once(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/cards/collection"))
        .respond_with(response)
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}
