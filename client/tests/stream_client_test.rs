//! Integration tests for the stream client's HTTP behavior.
//!
//! These tests verify the wire format of each event, header handling for
//! optional API keys, and that transport failures are absorbed rather than
//! surfaced to the caller.

use agentcast_client::client::{StreamClient, StreamConfig};
use agentcast_client::types::{AgentStatus, CodeAction, EventKind};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Helpers
// =============================================================================

/// Creates a client pointed at the mock server, without an API key.
fn create_client(server: &MockServer) -> StreamClient {
    StreamClient::with_config(StreamConfig::new("test-agent").with_server_url(server.uri()))
}

/// Creates a client pointed at the mock server with an API key configured.
fn create_client_with_key(server: &MockServer, api_key: &str) -> StreamClient {
    StreamClient::with_config(
        StreamConfig::new("test-agent")
            .with_server_url(server.uri())
            .with_api_key(api_key),
    )
}

/// Parses the body of the only request the mock server received.
async fn received_body(server: &MockServer) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).expect("body should be valid JSON")
}

// =============================================================================
// Payload Shape Tests
// =============================================================================

#[tokio::test]
async fn think_posts_identity_and_thought() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "agentId": "test-agent",
            "thinking": "pondering the bug"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).think("pondering the bug").await;
}

#[tokio::test]
async fn code_derives_language_and_defaults_to_write() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "agentId": "test-agent",
            "code": {
                "filename": "main.py",
                "content": "print(1)",
                "action": "write",
                "language": "python"
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server)
        .code("main.py", "print(1)", CodeAction::default())
        .await;
}

#[tokio::test]
async fn code_with_unknown_extension_streams_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "code": { "filename": "notes.xyz", "language": "text", "action": "delete" }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server)
        .code("notes.xyz", "abc", CodeAction::Delete)
        .await;
}

#[tokio::test]
async fn status_serializes_as_bare_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "agentId": "test-agent",
            "status": "offline"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).status(AgentStatus::Offline).await;
}

#[tokio::test]
async fn live_sends_live_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "status": "live" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).live().await;
}

#[tokio::test]
async fn task_without_description_serializes_null() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).task("Fix bug", None).await;

    let body = received_body(&server).await;
    assert_eq!(body["task"]["title"], "Fix bug");
    assert!(body["task"]["description"].is_null());
}

#[tokio::test]
async fn preview_sends_url_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "preview": { "url": "https://demo.example.com" }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).preview("https://demo.example.com").await;
}

#[tokio::test]
async fn raw_send_streams_typed_event() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "thinking": "raw" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server)
        .send(EventKind::Thinking("raw".to_string()))
        .await;
}

#[tokio::test]
async fn each_payload_carries_exactly_one_event_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).think("solo").await;

    let body = received_body(&server).await;
    let object = body.as_object().expect("body should be an object");
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("agentId"));
    assert!(object.contains_key("thinking"));
}

// =============================================================================
// Authentication Header Tests
// =============================================================================

#[tokio::test]
async fn bearer_token_sent_when_api_key_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sekret-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client_with_key(&server, "sekret-key")
        .think("private stream")
        .await;
}

#[tokio::test]
async fn authorization_header_absent_without_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).think("public stream").await;

    let requests = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert!(requests[0].headers.get("authorization").is_none());
}

// =============================================================================
// Failure Absorption Tests
// =============================================================================

/// A server error must not surface to the caller, and must not prevent
/// later events from being sent.
#[tokio::test]
async fn server_error_is_absorbed_and_stream_continues() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client.think("this one fails").await;
    client.think("this one lands").await;
}

#[tokio::test]
async fn unauthorized_response_is_absorbed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).status(AgentStatus::Paused).await;
}

/// A connection failure must not panic or propagate.
#[tokio::test]
async fn unreachable_server_is_absorbed() {
    let client =
        StreamClient::with_config(StreamConfig::new("test-agent").with_server_url(
            // Port 1 is essentially never listening; the connect fails fast.
            "http://127.0.0.1:1",
        ));

    client.think("into the void").await;
    client.task("still fine", Some("caller keeps running".to_string())).await;
}
