use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {message}")]
    Input { message: String },

    #[error("Page fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Failures while fetching one page of the thread. A single fetch failure
/// terminates the pagination loop; nothing is retried.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("HTTP {status} fetching page {page}")]
    Status { page: u32, status: u16 },

    #[error("Network failure fetching page {page}: {details}")]
    Network { page: u32, details: String },
}

/// Failures from the chat-completion pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error(
        "Endpoint path not found (HTTP 404). Check that the endpoint URL \
         includes the full completions path, e.g. '/v1/chat/completions'"
    )]
    EndpointPath,

    #[error("Authentication rejected (HTTP 401): credential invalid or expired")]
    AuthRejected,

    #[error("Chat completion request failed: HTTP {status} - {snippet}")]
    Request { status: u16, snippet: String },

    #[error("Invalid chat completion response: {details}")]
    InvalidResponse { details: String },
}
