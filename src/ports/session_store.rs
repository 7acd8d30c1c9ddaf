//! Port for the conversation session store.

use async_trait::async_trait;

use crate::domain::{ConversationToken, UserId};

/// Process-wide mapping from user to the Dify continuation token.
///
/// One logical conversation thread per user: `None` means the next call
/// starts a new conversation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, if any.
    async fn token(&self, user: &UserId) -> Option<ConversationToken>;

    /// Overwrites the stored token.
    async fn set_token(&self, user: &UserId, token: ConversationToken);

    /// Removes the entry entirely. Idempotent.
    async fn clear(&self, user: &UserId);
}
