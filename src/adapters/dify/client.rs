//! Dify chat-messages client.
//!
//! One HTTP POST per inbound user message, in blocking response mode.
//! The client owns the continuation-token lifecycle: token read before the
//! call, token stored after a successful call that returns one. Every
//! failure path resolves to a fixed user-facing string, so [`ChatBackend`]
//! never raises past its boundary and no partial state is persisted on
//! failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::DifyConfig;
use crate::domain::{replies, ConversationToken, UserId};
use crate::ports::{ChatBackend, SessionStore, SettingsStore};

/// Client for the Dify chat-completion API.
pub struct DifyClient {
    config: DifyConfig,
    client: Client,
    settings: Arc<dyn SettingsStore>,
    sessions: Arc<dyn SessionStore>,
}

impl DifyClient {
    /// Creates a new client with the given configuration and stores.
    pub fn new(
        config: DifyConfig,
        settings: Arc<dyn SettingsStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            settings,
            sessions,
        }
    }

    /// Builds the chat-messages endpoint URL.
    fn chat_messages_url(&self) -> String {
        format!("{}/chat-messages", self.config.base_url)
    }

    /// Reads both stores and assembles the request body.
    async fn build_request(&self, user: &UserId, text: &str) -> ChatMessageRequest {
        let inputs = self.settings.get(user).await.input_variables();
        let conversation_id = self
            .sessions
            .token(user)
            .await
            .map(|t| t.as_str().to_string());

        ChatMessageRequest {
            inputs,
            query: text.to_string(),
            response_mode: "blocking",
            user: user.as_str().to_string(),
            conversation_id,
        }
    }
}

#[async_trait]
impl ChatBackend for DifyClient {
    async fn send(&self, user: &UserId, text: &str) -> String {
        let request = self.build_request(user, text).await;

        let response = match self
            .client
            .post(self.chat_messages_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(user = %user, "Dify request timed out");
                return replies::TIMEOUT.to_string();
            }
            Err(e) => {
                tracing::error!(user = %user, error = %e, "Dify request failed");
                return replies::BACKEND_ERROR.to_string();
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(user = %user, %status, body, "Dify API error");
            return replies::BACKEND_ERROR.to_string();
        }

        let data: ChatMessageResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(user = %user, error = %e, "Failed to parse Dify response");
                return replies::BACKEND_ERROR.to_string();
            }
        };

        let (reply, token) = extract_reply(data);
        if let Some(token) = token {
            // The backend is authoritative for continuation, even across a
            // reset race.
            self.sessions.set_token(user, token).await;
        }

        reply
    }
}

/// Splits a successful response into reply text and continuation token.
fn extract_reply(data: ChatMessageResponse) -> (String, Option<ConversationToken>) {
    let token = data
        .conversation_id
        .and_then(|id| ConversationToken::new(id).ok());
    let reply = data
        .answer
        .unwrap_or_else(|| replies::NO_ANSWER.to_string());
    (reply, token)
}

// ----- Dify API types -----

#[derive(Debug, Serialize)]
struct ChatMessageRequest {
    inputs: Map<String, Value>,
    query: String,
    response_mode: &'static str,
    user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    answer: Option<String>,
    conversation_id: Option<String>,
}
