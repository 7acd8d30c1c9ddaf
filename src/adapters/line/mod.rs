//! LINE Messaging API adapter: signature verification, webhook DTOs, and
//! the reply client.

mod reply_client;
mod signature;
mod webhook;

pub use reply_client::LineReplyClient;
pub use signature::{SignatureError, SignatureVerifier};
pub use webhook::{TextMessageEvent, WebhookEnvelope};

#[cfg(test)]
pub use signature::compute_test_signature;
