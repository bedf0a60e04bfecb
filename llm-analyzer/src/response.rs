use serde::Deserialize;
use threadlens_core::AnalysisError;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// What a 2xx response body resolved to: the expected chat-completion shape,
/// or any other valid JSON carried through as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatResponse {
    /// First choice's message content from `{choices:[{message:{content}}]}`.
    Expected(String),
    /// The whole response, stringified, for endpoints with other shapes.
    Fallback(String),
}

impl ChatResponse {
    /// Resolve a response body once, at the boundary. Non-JSON bodies are
    /// the only hard failure.
    pub fn from_body(body: &str) -> Result<Self, AnalysisError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| AnalysisError::InvalidResponse {
                details: e.to_string(),
            })?;

        if let Ok(mut completion) = serde_json::from_value::<ChatCompletion>(value.clone()) {
            if !completion.choices.is_empty() {
                let choice = completion.choices.remove(0);
                return Ok(ChatResponse::Expected(choice.message.content));
            }
        }
        Ok(ChatResponse::Fallback(value.to_string()))
    }

    pub fn into_text(self) -> String {
        match self {
            ChatResponse::Expected(text) => text,
            ChatResponse::Fallback(text) => text,
        }
    }
}

/// Map a non-2xx status from the completion endpoint to its domain error.
/// The error-body snippet is capped at 100 characters.
pub fn classify_error_status(status: u16, body: &str) -> AnalysisError {
    match status {
        404 => AnalysisError::EndpointPath,
        401 => AnalysisError::AuthRejected,
        _ => AnalysisError::Request {
            status,
            snippet: body.chars().take(100).collect(),
        },
    }
}
