//! HTML parsing infrastructure for Kleinanzeigen pages
//!
//! Trait-based extraction over an abstract queryable document. Field parsers
//! are pure string functions; the two page parsers locate fragments and decide
//! which failures abort the page and which only blank a field.

pub mod config;
pub mod document;
pub mod field_parsers;
pub mod listing_page_parser;
pub mod record_parser;

// Re-export public types
pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
pub use config::{ListingSelectors, ParsingConfig, RecordSelectors};
pub use document::{Fragment, HtmlDocument, HtmlFragment, QueryableDocument};
pub use listing_page_parser::ListingPageParser;
pub use record_parser::RecordParser;

use tracing::debug;

use crate::domain::{ListingPage, Record};

/// Parser producing one value from one document
pub trait DocumentParser {
    type Output;

    fn parse_document<D: QueryableDocument>(&self, document: &D) -> ParsingResult<Self::Output>;

    /// Parse raw markup bytes with the `scraper` backend
    fn parse_bytes(&self, bytes: &[u8]) -> ParsingResult<Self::Output> {
        let document = HtmlDocument::parse(bytes)?;
        self.parse_document(&document)
    }
}

/// Extract a search result page with the default selectors
pub fn extract_listing_page(bytes: &[u8]) -> ParsingResult<ListingPage> {
    ListingPageParser::new()?.parse_bytes(bytes)
}

/// Extract an ad detail page with the default selectors
pub fn extract_record(bytes: &[u8]) -> ParsingResult<Record> {
    RecordParser::new()?.parse_bytes(bytes)
}

/// Swallow a field level error, leaving the field at its empty value
pub(crate) fn or_default<T: Default>(field: &str, result: ParsingResult<T>) -> T {
    result.unwrap_or_else(|e| {
        debug!("Leaving {} empty: {}", field, e);
        T::default()
    })
}
