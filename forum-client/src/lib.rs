pub mod extractor;
pub mod page_source;
pub mod parser;

pub use extractor::{extract, ExtractOptions};
pub use page_source::{HttpPageSource, PageSource};
pub use parser::{parse_page, ParsedPage, STOP_PHRASE};
