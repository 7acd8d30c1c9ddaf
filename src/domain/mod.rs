//! Domain layer: value objects and pure message logic.

mod command;
mod errors;
mod ids;
pub mod replies;
mod settings;

pub use command::{classify, Command};
pub use errors::ValidationError;
pub use ids::{ConversationToken, UserId};
pub use settings::{SettingsField, UserSettings};
