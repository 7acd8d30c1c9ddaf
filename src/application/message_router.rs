//! Inbound message dispatch.
//!
//! The router classifies each text message into a [`Command`] and executes
//! it against the injected stores and AI backend. Its output is always
//! exactly one reply string; no failure escapes it.

use std::sync::Arc;

use crate::domain::{classify, replies, Command, SettingsField, UserId};
use crate::ports::{ChatBackend, SessionStore, SettingsStore};

use super::UserLocks;

/// Routes one inbound message to the matching handler.
pub struct MessageRouter {
    settings: Arc<dyn SettingsStore>,
    sessions: Arc<dyn SessionStore>,
    backend: Arc<dyn ChatBackend>,
    locks: UserLocks,
}

impl MessageRouter {
    /// Creates a new router over the given stores and backend.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        sessions: Arc<dyn SessionStore>,
        backend: Arc<dyn ChatBackend>,
    ) -> Self {
        Self {
            settings,
            sessions,
            backend,
            locks: UserLocks::new(),
        }
    }

    /// Handles one message and returns the reply text.
    ///
    /// All work for one user is serialized behind that user's lock, so a
    /// read-modify-write sequence never interleaves with another delivery
    /// for the same sender.
    pub async fn handle(&self, user: &UserId, text: &str) -> String {
        let lock = self.locks.for_user(user).await;
        let _guard = lock.lock().await;

        match classify(text) {
            Command::Reset => self.handle_reset(user).await,
            Command::UpdateSetting { key, value } => {
                self.handle_update(user, &key, value).await
            }
            Command::SettingsHelp => replies::SETTINGS_USAGE.to_string(),
            Command::ShowSettings => self.handle_query(user).await,
            Command::Forward => self.backend.send(user, text).await,
        }
    }

    /// Clears conversation continuity. Settings are left untouched.
    async fn handle_reset(&self, user: &UserId) -> String {
        self.sessions.clear(user).await;
        tracing::info!(user = %user, "conversation reset");
        replies::RESET_DONE.to_string()
    }

    /// Stores one settings field, or rejects an unknown key.
    async fn handle_update(&self, user: &UserId, key: &str, value: String) -> String {
        match SettingsField::from_key(key) {
            Some(field) => {
                let reply = replies::settings_saved(key, &value);
                self.settings.set_field(user, field, value).await;
                reply
            }
            None => replies::UNKNOWN_SETTING.to_string(),
        }
    }

    /// Formats the current settings, or points at the usage help.
    async fn handle_query(&self, user: &UserId) -> String {
        let settings = self.settings.get(user).await;
        if settings.is_empty() {
            replies::no_settings_yet()
        } else {
            replies::settings_summary(&settings)
        }
    }
}
