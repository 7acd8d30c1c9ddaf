//! Port for sending replies back through the messaging platform.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the platform reply API.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    #[error("Reply request failed: {0}")]
    Transport(String),

    #[error("Reply rejected with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Sends exactly one text reply for a webhook event.
///
/// The reply token is the one-time identifier issued per inbound event.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send_text(&self, reply_token: &str, text: &str) -> Result<(), ReplyError>;
}
