//! Per-user operation locks.
//!
//! Concurrent webhook deliveries for the same user (platform retries,
//! rapid double-send) would otherwise interleave the read-token → call
//! backend → write-token sequence. The registry hands out one async mutex
//! per user key; holding it serializes whole router dispatches for that
//! user while leaving other users untouched. Store-internal locks stay
//! short; this lock is the only one held across the backend call.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::UserId;

/// Registry of per-user locks.
#[derive(Debug, Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for the given user, creating it on first use.
    ///
    /// Entries are never removed; the user population of a single bot is
    /// small enough that the map simply grows with it.
    pub async fn for_user(&self, user: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(user.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
