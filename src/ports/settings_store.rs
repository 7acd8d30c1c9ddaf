//! Port for the per-user settings store.

use async_trait::async_trait;

use crate::domain::{SettingsField, UserId, UserSettings};

/// Process-wide mapping from user to named string attributes.
///
/// Both operations are total: a missing user reads as the all-absent
/// default and a write creates the entry on the fly.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored settings or an all-absent default.
    async fn get(&self, user: &UserId) -> UserSettings;

    /// Creates the user's entry if absent and overwrites the named field.
    async fn set_field(&self, user: &UserId, field: SettingsField, value: String);
}
