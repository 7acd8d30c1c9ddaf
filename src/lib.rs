//! Dify Relay - LINE × Dify webhook bridge
//!
//! Receives LINE webhook events, forwards text messages to the Dify
//! chat-completion API, and replies into the same conversation. Keeps a
//! per-user conversation session plus a small per-user settings store
//! that customizes the input variables sent to Dify.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
