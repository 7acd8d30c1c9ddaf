//! LINE webhook envelope DTOs.
//!
//! Only the fields the relay acts on are modeled; unknown fields in the
//! payload are ignored by serde.

use serde::Deserialize;

/// Top-level webhook request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One webhook event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,

    /// One-time token required to reply to this event.
    pub reply_token: Option<String>,

    /// Delivery identifier; the natural dedup key for platform retries.
    pub webhook_event_id: Option<String>,

    pub source: Option<EventSource>,

    pub message: Option<EventMessage>,
}

/// Sender of an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    pub user_id: Option<String>,
}

/// Message content of a message event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub message_type: String,

    pub text: Option<String>,
}

/// A text message event reduced to the fields the router needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessageEvent {
    pub user_id: String,
    pub text: String,
    pub reply_token: String,
    pub webhook_event_id: Option<String>,
}

impl WebhookEnvelope {
    /// Extracts the text-message events; everything else (stickers,
    /// follows, images) is skipped.
    pub fn text_messages(&self) -> Vec<TextMessageEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == "message")
            .filter_map(|e| {
                let message = e.message.as_ref()?;
                if message.message_type != "text" {
                    return None;
                }
                Some(TextMessageEvent {
                    user_id: e.source.as_ref()?.user_id.clone()?,
                    text: message.text.clone()?,
                    reply_token: e.reply_token.clone()?,
                    webhook_event_id: e.webhook_event_id.clone(),
                })
            })
            .collect()
    }
}
