//! Completion client - talks to an OpenAI-compatible chat endpoint.

use crate::config::Config;
use crate::error::CasegenError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One role-tagged message in a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat completions endpoint.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Subset of the chat completions response envelope we consume.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the remote completion endpoint.
///
/// One attempt per call: no retry, caching, or rate limiting. The HTTP
/// connection is owned by `reqwest` and released on every exit path.
pub struct CompletionClient {
    client: reqwest::Client,
    config: Config,
}

impl CompletionClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one chat request and return the raw response text.
    ///
    /// Fails with a configuration error before any network I/O when the
    /// credential is blank. The await on the exchange is the only
    /// suspension point.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CasegenError> {
        if self.config.api_key.trim().is_empty() {
            return Err(CasegenError::Configuration(
                "OPENAI_API_KEY environment variable is not set".to_string(),
            ));
        }

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
        };

        debug!("Sending completion request to {}", url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                CasegenError::RemoteCall(format!("Failed to reach completion endpoint: {}", e))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(CasegenError::RemoteCall(format!(
                "Completion request failed ({}): {}",
                status, text
            )));
        }

        let completion: ChatCompletionResponse = resp.json().await.map_err(|e| {
            CasegenError::RemoteCall(format!("Failed to parse completion envelope: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}
