//! Port for the conversational AI backend.

use async_trait::async_trait;

use crate::domain::UserId;

/// One chat turn against the AI backend.
///
/// The implementation owns the continuation-token lifecycle and resolves
/// every failure path to user-facing text, so this operation never raises
/// past its own boundary.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends one user message and returns the reply text.
    async fn send(&self, user: &UserId, text: &str) -> String;
}
