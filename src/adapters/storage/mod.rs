//! Store adapters.

mod in_memory;

pub use in_memory::{InMemorySessionStore, InMemorySettingsStore};
