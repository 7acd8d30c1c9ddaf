//! Outbound and inbound adapters.

pub mod dify;
pub mod http;
pub mod line;
pub mod storage;
