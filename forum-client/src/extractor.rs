use crate::page_source::PageSource;
use crate::parser;
use std::time::Duration;
use threadlens_core::{ErrorExt, ExtractionResult, ProgressObserver};
use tracing::{debug, info, warn};

/// Knobs for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Hard ceiling on fetch attempts, a safety valve against endless
    /// pagination. Hitting it is a normal termination.
    pub max_pages: u32,
    /// Politeness pause before every fetch after the first.
    pub inter_page_delay: Duration,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: 50,
            inter_page_delay: Duration::from_millis(500),
        }
    }
}

/// Walk the thread's pages in order, accumulating comments until the stop
/// sentinel, an empty page past the first, a fetch failure, or the page
/// ceiling ends the run.
///
/// Always returns a well-formed result: a failed fetch is logged, reported
/// through the observer, and the comments collected so far are kept. Pages
/// are fetched strictly one at a time.
pub async fn extract<S, O>(
    source: &S,
    source_url: &str,
    options: &ExtractOptions,
    observer: &O,
) -> ExtractionResult
where
    S: PageSource,
    O: ProgressObserver,
{
    let mut result = ExtractionResult::new(source_url);
    let mut page = 1u32;

    loop {
        observer.on_progress(&format!(
            "Fetching page {}... ({} comments collected)",
            page,
            result.comments.len()
        ));

        if page > 1 {
            tokio::time::sleep(options.inter_page_delay).await;
        }

        let html = match source.fetch_page(page).await {
            Ok(html) => html,
            Err(e) => {
                // Terminal for the loop, but not for the run: keep what we
                // have and let the observer text carry the failure.
                warn!("Extraction stopped at page {}: {}", page, e);
                observer.on_progress(&e.user_friendly_message());
                break;
            }
        };

        let parsed = parser::parse_page(&html);

        // First page that exposes a post body wins; later pages never
        // overwrite it.
        if result.post_content.is_none() {
            result.post_content = parsed.post_content;
        }

        if parsed.found_stop {
            debug!("Stop sentinel found on page {}, ending pagination", page);
            break;
        }

        if parsed.comments.is_empty() {
            if page > 1 {
                debug!("No comments on page {}, treating as end of pagination", page);
                break;
            }
            // A first page without comment elements keeps paginating; the
            // sentinel may only show up on a later page.
        } else {
            result.comments.extend(parsed.comments);
        }

        page += 1;
        if page > options.max_pages {
            info!("Reached page ceiling of {}, stopping", options.max_pages);
            break;
        }
    }

    info!(
        "Extraction finished: {} comments from {}",
        result.comments.len(),
        result.source_url
    );
    result
}
