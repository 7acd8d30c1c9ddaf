//! Ports: trait seams between the application core and its adapters.

mod chat_backend;
mod reply_sender;
mod session_store;
mod settings_store;

pub use chat_backend::ChatBackend;
pub use reply_sender::{ReplyError, ReplySender};
pub use session_store::SessionStore;
pub use settings_store::SettingsStore;
