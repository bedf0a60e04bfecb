pub mod prompt;
pub mod response;

use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use threadlens_core::{AnalysisConfig, AnalysisError, AnalysisReport, CoreError, ExtractionResult};
use tracing::{debug, info};

use crate::response::{classify_error_status, ChatResponse};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Client for the configured chat-completion endpoint. One request per run,
/// no retry; the transport's own limits are the only timeout.
pub struct ChatCompletionClient {
    http: Client,
}

impl ChatCompletionClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Endpoint and credential must both be present before any network work
    /// is attempted.
    fn validate_config(config: &AnalysisConfig) -> Result<(), AnalysisError> {
        if config.endpoint_url.trim().is_empty() {
            return Err(AnalysisError::MissingConfig {
                field: "endpoint_url".to_string(),
            });
        }
        if config.credential.trim().is_empty() {
            return Err(AnalysisError::MissingConfig {
                field: "credential".to_string(),
            });
        }
        Ok(())
    }

    /// Run one analysis: assemble the bounded prompt, issue the single
    /// chat-completion request, classify failures, and format the report.
    /// Does not mutate the extraction.
    pub async fn analyze(
        &self,
        extraction: &ExtractionResult,
        config: &AnalysisConfig,
    ) -> Result<AnalysisReport, CoreError> {
        Self::validate_config(config)?;

        let body = prompt::assemble_prompt(extraction);
        debug!("Assembled prompt of {} characters", body.chars().count());

        let payload = ChatRequest {
            model: &config.model_id,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &config.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &body,
                },
            ],
            temperature: 0.7,
        };

        info!(
            "Requesting analysis from {} with model {}",
            config.endpoint_url, config.model_id
        );
        let response = self
            .http
            .post(&config.endpoint_url)
            .bearer_auth(&config.credential)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_error_status(status.as_u16(), &error_body).into());
        }

        let response_body = response.text().await?;
        let text = ChatResponse::from_body(&response_body)?.into_text();
        info!("Analysis response received ({} characters)", text.len());

        Ok(AnalysisReport {
            source_url: extraction.source_url.clone(),
            generated_at: Local::now(),
            text,
        })
    }
}

impl Default for ChatCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_extraction() -> ExtractionResult {
        ExtractionResult::new("https://f/t")
    }

    fn config(endpoint: &str, credential: &str) -> AnalysisConfig {
        AnalysisConfig {
            endpoint_url: endpoint.to_string(),
            credential: credential.to_string(),
            model_id: "gpt-3.5-turbo".to_string(),
            system_prompt: "Summarize the discussion.".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_endpoint_fails_before_any_request() {
        let client = ChatCompletionClient::new();
        let result = client
            .analyze(&empty_extraction(), &config("", "sk-key"))
            .await;
        match result {
            Err(CoreError::Analysis(AnalysisError::MissingConfig { field })) => {
                assert_eq!(field, "endpoint_url");
            }
            other => panic!("expected missing-config error, got {:?}", other),
        }
    }

    // The endpoint here is syntactically valid but unroutable; an attempted
    // request could not produce MissingConfig, so this also pins that
    // validation happens before any network call.
    #[tokio::test]
    async fn missing_credential_fails_before_any_request() {
        let client = ChatCompletionClient::new();
        let result = client
            .analyze(
                &empty_extraction(),
                &config("http://192.0.2.1/v1/chat/completions", "   "),
            )
            .await;
        match result {
            Err(CoreError::Analysis(AnalysisError::MissingConfig { field })) => {
                assert_eq!(field, "credential");
            }
            other => panic!("expected missing-config error, got {:?}", other),
        }
    }
}
