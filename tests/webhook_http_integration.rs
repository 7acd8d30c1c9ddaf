//! Integration tests for the webhook HTTP surface.
//!
//! These tests drive the full axum router end to end:
//! 1. Signature verification gates every webhook delivery
//! 2. Text messages flow through the command router to the chat backend
//! 3. Replies go out through the reply sender with the right token
//! 4. The endpoint acknowledges `OK` once the signature passes

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use http::{Request, StatusCode};
use sha2::Sha256;
use tower::ServiceExt;

use dify_relay::adapters::http::{app_router, AppState};
use dify_relay::adapters::line::SignatureVerifier;
use dify_relay::adapters::storage::{InMemorySessionStore, InMemorySettingsStore};
use dify_relay::application::MessageRouter;
use dify_relay::domain::{replies, ConversationToken, UserId};
use dify_relay::ports::{ChatBackend, ReplyError, ReplySender, SessionStore, SettingsStore};

const CHANNEL_SECRET: &str = "integration_test_secret";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Chat backend that answers with a canned string and records queries.
struct ScriptedBackend {
    reply: String,
    queries: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&self, _user: &UserId, text: &str) -> String {
        self.queries.lock().unwrap().push(text.to_string());
        self.reply.clone()
    }
}

/// Reply sender that records what would be sent to LINE.
struct RecordingReplySender {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingReplySender {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingReplySender {
    async fn send_text(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        self.sent
            .lock()
            .unwrap()
            .push((reply_token.to_string(), text.to_string()));
        Ok(())
    }
}

struct TestApp {
    router: axum::Router,
    backend: Arc<ScriptedBackend>,
    reply_sender: Arc<RecordingReplySender>,
    sessions: Arc<InMemorySessionStore>,
    settings: Arc<InMemorySettingsStore>,
}

fn test_app(backend_reply: &str) -> TestApp {
    let settings = Arc::new(InMemorySettingsStore::new());
    let sessions = Arc::new(InMemorySessionStore::new());
    let backend = Arc::new(ScriptedBackend::new(backend_reply));
    let reply_sender = Arc::new(RecordingReplySender::new());

    let message_router = Arc::new(MessageRouter::new(
        settings.clone(),
        sessions.clone(),
        backend.clone(),
    ));

    let state = AppState {
        router: message_router,
        reply_sender: reply_sender.clone(),
        verifier: SignatureVerifier::new(CHANNEL_SECRET),
    };

    TestApp {
        router: app_router(state),
        backend,
        reply_sender,
        sessions,
        settings,
    }
}

fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}

fn text_event_body(user_id: &str, reply_token: &str, text: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "destination": "U-bot",
        "events": [{
            "type": "message",
            "replyToken": reply_token,
            "webhookEventId": "01INTEGRATION",
            "source": { "type": "user", "userId": user_id },
            "message": { "id": "m1", "type": "text", "text": text }
        }]
    }))
    .unwrap()
}

fn signed_request(body: Vec<u8>, secret: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/callback")
        .header("content-type", "application/json")
        .header("X-Line-Signature", sign(secret, &body))
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Health Endpoint
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app("unused");

    let response = app
        .router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Signature Gate
// =============================================================================

#[tokio::test]
async fn webhook_without_signature_returns_400() {
    let app = test_app("unused");
    let body = text_event_body("U-alice", "rt-1", "hello");

    let request = Request::builder()
        .method("POST")
        .uri("/callback")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.backend.queries().is_empty());
    assert!(app.reply_sender.sent().is_empty());
}

#[tokio::test]
async fn webhook_with_bad_signature_returns_400() {
    let app = test_app("unused");
    let body = text_event_body("U-alice", "rt-1", "hello");

    let request = signed_request(body, "a_different_secret");
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.backend.queries().is_empty());
}

// =============================================================================
// Message Flow
// =============================================================================

#[tokio::test]
async fn text_message_round_trips_to_backend_and_reply() {
    let app = test_app("AIの応答です");
    let body = text_event_body("U-alice", "rt-1", "今日の天気は？");

    let response = app.router.clone().oneshot(signed_request(body, CHANNEL_SECRET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");

    assert_eq!(app.backend.queries(), vec!["今日の天気は？".to_string()]);
    let sent = app.reply_sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], ("rt-1".to_string(), "AIの応答です".to_string()));
}

#[tokio::test]
async fn reset_command_clears_session_without_backend_call() {
    let app = test_app("unused");
    let user = UserId::new("U-alice").unwrap();
    app.sessions
        .set_token(&user, ConversationToken::new("conv-1").unwrap())
        .await;

    let body = text_event_body("U-alice", "rt-1", "リセット");
    let response = app.router.clone().oneshot(signed_request(body, CHANNEL_SECRET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.sessions.token(&user).await.is_none());
    assert!(app.backend.queries().is_empty());
    assert_eq!(app.reply_sender.sent()[0].1, replies::RESET_DONE);
}

#[tokio::test]
async fn settings_update_persists_and_echoes() {
    let app = test_app("unused");
    let user = UserId::new("U-alice").unwrap();

    let body = text_event_body("U-alice", "rt-1", "設定 天気 晴れ");
    let response = app.router.clone().oneshot(signed_request(body, CHANNEL_SECRET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        app.settings.get(&user).await.weather.as_deref(),
        Some("晴れ")
    );
    assert!(app.backend.queries().is_empty());
    assert_eq!(
        app.reply_sender.sent()[0].1,
        replies::settings_saved("天気", "晴れ")
    );
}

#[tokio::test]
async fn unparseable_body_is_acknowledged_after_valid_signature() {
    let app = test_app("unused");
    let body = b"definitely not json".to_vec();

    let response = app.router.oneshot(signed_request(body, CHANNEL_SECRET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}
