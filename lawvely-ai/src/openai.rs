//! OpenAI chat-completions client
//!
//! Thin typed wrapper over the chat completions endpoint. The credential,
//! model and base URL arrive in an explicitly injected `OpenAiConfig`;
//! nothing here reads process globals.

use lawvely_common::config::OpenAiConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// OpenAI client errors
#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Response contained no message content")]
    EmptyResponse,
}

impl From<OpenAiError> for lawvely_common::Error {
    fn from(e: OpenAiError) -> Self {
        lawvely_common::Error::Upstream(e.to_string())
    }
}

/// One role-tagged message in a chat completion request
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

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// OpenAI API client
#[derive(Clone)]
pub struct OpenAiClient {
    http_client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenAiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Send one chat completion request and return the generated text
    /// (`choices[0].message.content`).
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: Option<f32>,
    ) -> Result<String, OpenAiError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens,
            temperature,
        };

        tracing::debug!(model = %self.config.model, max_tokens, "Sending chat completion request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api(status.as_u16(), error_text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(OpenAiError::EmptyResponse)?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAiClient::new(OpenAiConfig::new("sk-test"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_request_serialization_omits_missing_temperature() {
        let messages = [ChatMessage::system("sys"), ChatMessage::user("usr")];
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
            max_tokens: 50,
            temperature: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_response_content_extraction() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Finance, Housing"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Finance, Housing");
    }
}
