use reqwest::Client;
use std::time::Duration;
use threadlens_core::{CoreError, FetchError};
use tracing::{debug, error};
use url::Url;

const USER_AGENT: &str = "threadlens/0.1 (forum thread exporter)";

/// One page of thread markup at a time. The pagination loop is generic over
/// this so tests can drive it with scripted page sequences.
pub trait PageSource {
    /// Fetch the raw markup for a 1-based page index.
    async fn fetch_page(&self, page: u32) -> Result<String, CoreError>;
}

/// HTTP-backed page source for the forum: `GET <base>?page=<n>`.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    http: Client,
    base_url: Url,
}

impl HttpPageSource {
    /// Build a source from user input. The input is normalized to
    /// origin + path; any query or fragment the user pasted is dropped.
    /// This is the only place a malformed URL surfaces as a hard error.
    pub fn new(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let mut base_url = Url::parse(trimmed).map_err(|e| CoreError::Input {
            message: format!("'{}' is not a valid URL: {}", trimmed, e),
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CoreError::Input {
                message: format!("unsupported URL scheme '{}'", base_url.scheme()),
            });
        }

        base_url.set_query(None);
        base_url.set_fragment(None);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { http, base_url })
    }

    /// Normalized base URL the pages are fetched from.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32) -> Result<String, CoreError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());

        debug!("Fetching thread page {}: {}", page, url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                page,
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Page {} request failed with status {}", page, status);
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            page,
            details: e.to_string(),
        })?;
        Ok(body)
    }
}
