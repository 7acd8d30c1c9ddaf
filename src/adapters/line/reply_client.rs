//! LINE Messaging API reply client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::LineConfig;
use crate::ports::{ReplyError, ReplySender};

/// Upper bound on one reply call. The reply token expires quickly anyway,
/// so a stalled connection must not hold the webhook dispatch open.
const REPLY_TIMEOUT_SECS: u64 = 10;

/// Client for `POST /v2/bot/message/reply`.
pub struct LineReplyClient {
    config: LineConfig,
    client: Client,
}

impl LineReplyClient {
    /// Creates a new reply client with the given configuration.
    pub fn new(config: LineConfig) -> Self {
        Self::with_timeout(config, Duration::from_secs(REPLY_TIMEOUT_SECS))
    }

    fn with_timeout(config: LineConfig, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the reply endpoint URL.
    fn reply_url(&self) -> String {
        format!("{}/v2/bot/message/reply", self.config.api_base)
    }
}

#[async_trait]
impl ReplySender for LineReplyClient {
    async fn send_text(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        let request = ReplyRequest {
            reply_token,
            messages: vec![TextMessage {
                message_type: "text",
                text,
            }],
        };

        let response = self
            .client
            .post(self.reply_url())
            .bearer_auth(self.config.channel_access_token())
            .json(&request)
            .send()
            .await
            .map_err(|e| ReplyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReplyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

// ----- LINE API types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    message_type: &'static str,
    text: &'a str,
}
