//! Application layer: message dispatch over the injected ports.

mod message_router;
mod user_locks;

pub use message_router::MessageRouter;
pub use user_locks::UserLocks;
