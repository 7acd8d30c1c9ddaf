//! Dify API adapter.

mod client;

pub use client::DifyClient;
