use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One comment record scraped from a thread page.
///
/// Ordering is page order first, then document order within the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author, "Unknown" when the page does not expose one.
    pub author: String,
    /// ISO-ish timestamp from the page markup, empty when absent.
    pub time: String,
    /// Comment body text, empty when absent.
    pub body: String,
}

/// Everything one extraction run collected from a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Normalized base URL the pages were fetched from.
    pub source_url: String,
    /// Trimmed post body from the first page that exposed one.
    pub post_content: Option<String>,
    pub comments: Vec<Comment>,
}

impl ExtractionResult {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            post_content: None,
            comments: Vec::new(),
        }
    }
}

/// Configuration bundle for one analysis run, read from the settings store
/// at run start. The credential is plaintext here; it is only obfuscated at
/// rest inside the store.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub endpoint_url: String,
    pub credential: String,
    pub model_id: String,
    pub system_prompt: String,
}

/// Generated analysis text plus the metadata the report header needs.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub source_url: String,
    pub generated_at: DateTime<Local>,
    pub text: String,
}
