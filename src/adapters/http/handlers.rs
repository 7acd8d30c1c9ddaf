//! HTTP handlers for the webhook and health endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::adapters::line::{SignatureVerifier, WebhookEnvelope};
use crate::application::MessageRouter;
use crate::domain::UserId;
use crate::ports::ReplySender;

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<MessageRouter>,
    pub reply_sender: Arc<dyn ReplySender>,
    pub verifier: SignatureVerifier,
}

/// GET / - liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Dify × LINE relay is running!"
    }))
}

/// POST /callback - LINE webhook endpoint.
///
/// Rejects with 400 before any routing when the signature header is absent
/// or does not verify. Once the signature passes, the endpoint always
/// acknowledges `OK`: processing failures stay on our side of the fence so
/// the platform's at-least-once delivery is preserved.
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = match headers.get("X-Line-Signature").and_then(|v| v.to_str().ok()) {
        Some(signature) => signature,
        None => {
            tracing::warn!("webhook without X-Line-Signature header");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    if let Err(e) = state.verifier.verify(&body, signature) {
        tracing::warn!(error = %e, "webhook signature rejected");
        return StatusCode::BAD_REQUEST.into_response();
    }

    let envelope: WebhookEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable webhook body");
            return (StatusCode::OK, "OK").into_response();
        }
    };

    for event in envelope.text_messages() {
        let user = match UserId::new(&event.user_id) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "event without usable user id");
                continue;
            }
        };

        // TODO: use webhook_event_id to de-duplicate platform redeliveries;
        // today a retry causes a second backend call for the same message.
        tracing::info!(
            user = %user,
            event_id = event.webhook_event_id.as_deref().unwrap_or("-"),
            text_len = event.text.chars().count(),
            "handling text message"
        );

        let reply = state.router.handle(&user, &event.text).await;

        if let Err(e) = state.reply_sender.send_text(&event.reply_token, &reply).await {
            tracing::error!(user = %user, error = %e, "failed to send reply");
        }
    }

    (StatusCode::OK, "OK").into_response()
}
