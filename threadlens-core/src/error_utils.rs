use crate::error::*;
use tracing::{error, warn};

/// Helpers shared by every error kind: logging, the single human-readable
/// string that goes out on the status channel, and a stable code for logs.
pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Fetch(e) => {
                error!("Fetch error details: {:?}", e);
            }
            CoreError::Analysis(e) => {
                error!("Analysis error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Input { message } => {
                format!("Invalid source URL: {}", message)
            }
            CoreError::Fetch(e) => e.user_friendly_message(),
            CoreError::Analysis(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::Serialization(_) => {
                "Failed to encode or decode data. Please try again.".to_string()
            }
            CoreError::Io(_) => "Failed to read or write a file.".to_string(),
            CoreError::Internal { .. } => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Input { .. } => "INPUT".to_string(),
            CoreError::Fetch(_) => "FETCH".to_string(),
            CoreError::Analysis(_) => "ANALYSIS".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl ErrorExt for FetchError {
    fn log_error(&self) -> &Self {
        error!("FetchError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("FetchError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            FetchError::Status { page, status } => format!(
                "The forum returned HTTP {} for page {}. Collected comments up to that point \
                 were kept.",
                status, page
            ),
            FetchError::Network { page, .. } => format!(
                "Could not reach the forum while loading page {}. Collected comments up to \
                 that point were kept.",
                page
            ),
        }
    }

    fn error_code(&self) -> String {
        match self {
            FetchError::Status { .. } => "FETCH_STATUS".to_string(),
            FetchError::Network { .. } => "FETCH_NETWORK".to_string(),
        }
    }
}

impl ErrorExt for AnalysisError {
    fn log_error(&self) -> &Self {
        error!("AnalysisError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("AnalysisError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::MissingConfig { field } => format!(
                "Missing API configuration: '{}'. Open the configuration panel, fill in the \
                 API details and save.",
                field
            ),
            AnalysisError::EndpointPath => {
                "404 path error: the API URL looks incomplete. Check that it ends with \
                 '/v1/chat/completions'."
                    .to_string()
            }
            AnalysisError::AuthRejected => {
                "401 authentication failed: the API key is invalid or expired.".to_string()
            }
            AnalysisError::Request { status, snippet } => {
                format!("API request failed: {} - {}", status, snippet)
            }
            AnalysisError::InvalidResponse { .. } => {
                "The API returned a response that could not be read.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            AnalysisError::MissingConfig { .. } => "ANALYSIS_MISSING_CONFIG".to_string(),
            AnalysisError::EndpointPath => "ANALYSIS_ENDPOINT_PATH".to_string(),
            AnalysisError::AuthRejected => "ANALYSIS_AUTH_REJECTED".to_string(),
            AnalysisError::Request { .. } => "ANALYSIS_REQUEST_FAILED".to_string(),
            AnalysisError::InvalidResponse { .. } => "ANALYSIS_INVALID_RESPONSE".to_string(),
        }
    }
}
