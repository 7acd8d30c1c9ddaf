//! In-memory store adapters.
//!
//! Both stores live for the process lifetime only; there is no external
//! persistence and no sharing across instances. Each adapter owns its
//! synchronization, so callers never touch ambient global state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{ConversationToken, SettingsField, UserId, UserSettings};
use crate::ports::{SessionStore, SettingsStore};

/// In-memory per-user settings store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    entries: Arc<RwLock<HashMap<UserId, UserSettings>>>,
}

impl InMemorySettingsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with stored settings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when no user has stored settings.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, user: &UserId) -> UserSettings {
        let entries = self.entries.read().await;
        entries.get(user).cloned().unwrap_or_default()
    }

    async fn set_field(&self, user: &UserId, field: SettingsField, value: String) {
        let mut entries = self.entries.write().await;
        entries.entry(user.clone()).or_default().set(field, value);
    }
}

/// In-memory conversation session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    tokens: Arc<RwLock<HashMap<UserId, ConversationToken>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active sessions.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// True when no session is active.
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn token(&self, user: &UserId) -> Option<ConversationToken> {
        let tokens = self.tokens.read().await;
        tokens.get(user).cloned()
    }

    async fn set_token(&self, user: &UserId, token: ConversationToken) {
        let mut tokens = self.tokens.write().await;
        tokens.insert(user.clone(), token);
    }

    async fn clear(&self, user: &UserId) {
        let mut tokens = self.tokens.write().await;
        tokens.remove(user);
    }
}
