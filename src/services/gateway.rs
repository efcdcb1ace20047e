// src/services/gateway.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A single role-tagged message sent to the completion API.
#[derive(Debug, Clone, Serialize)]
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

/// Request payload for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Cap the number of generated tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Seam between the request handlers and the upstream completion API.
/// Handler tests substitute a stub implementation here.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send one completion request and return the first choice's text.
    /// Failures carry the upstream message intact; no retries.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// HTTP client for an OpenAI-compatible chat completions API.
pub struct CompletionGateway {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl CompletionGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        }
    }
}

#[async_trait]
impl ChatCompletion for CompletionGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("failed to send request to completion API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("completion API error {status}: {text}");
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("failed to parse completion API response")?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("completion API returned no choices")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_builder() {
        let request =
            CompletionRequest::new("gpt-4o-mini", vec![ChatMessage::user("pack for rain")])
                .temperature(0.7)
                .max_tokens(80);

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(80));
    }

    #[test]
    fn message_constructors() {
        let system = ChatMessage::system("You are a travel assistant");
        assert_eq!(system.role, "system");

        let user = ChatMessage::user("What should I visit?");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "What should I visit?");
    }

    #[test]
    fn optional_params_stay_off_the_wire() {
        let request = CompletionRequest::new("gpt-4o-mini", vec![ChatMessage::user("hi")]);
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn parses_first_choice_content() {
        let body =
            r#"{"choices":[{"message":{"role":"assistant","content":"Visit Stanley Park."}}]}"#;
        let completion: CompletionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(completion.choices[0].message.content, "Visit Stanley Park.");
    }
}
