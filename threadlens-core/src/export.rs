use crate::error::CoreError;
use crate::types::{AnalysisReport, ExtractionResult};

/// Fixed artifact names; the tool targets a single site and always exports
/// under the same names.
pub const RAW_DATA_FILENAME: &str = "wq_data.json";
pub const REPORT_FILENAME: &str = "WQ_Analysis_Report.md";

/// UTF-8 byte order mark. Prefixed to both artifacts so spreadsheet and
/// editor imports on Windows pick the right encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render an extraction result as the downloadable JSON artifact:
/// BOM-prefixed, pretty-printed UTF-8.
pub fn raw_data_artifact(extraction: &ExtractionResult) -> Result<Vec<u8>, CoreError> {
    let json = serde_json::to_string_pretty(extraction)?;
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + json.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(json.as_bytes());
    Ok(bytes)
}

/// Parse a JSON artifact back into an extraction result, tolerating a
/// missing BOM.
pub fn parse_raw_data_artifact(bytes: &[u8]) -> Result<ExtractionResult, CoreError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let extraction = serde_json::from_slice(body)?;
    Ok(extraction)
}

/// Render an analysis report as the downloadable Markdown artifact.
pub fn report_artifact(report: &AnalysisReport) -> Vec<u8> {
    let markdown = format!(
        "# Forum Thread Analysis Report\n\n\
         **Source**: {}\n\
         **Generated**: {}\n\n\
         ---\n\n\
         {}",
        report.source_url,
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.text
    );
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + markdown.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(markdown.as_bytes());
    bytes
}
