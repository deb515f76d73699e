//! Infrastructure layer for HTML extraction and page fetching
//!
//! Parsing is pure and synchronous; the HTTP client and the collector wrap it
//! for the command line tool.

pub mod collector;
pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod parsing_error;

// Re-export commonly used items
pub use collector::MarketplaceCollector;
pub use config::{AppConfig, ConfigError, CrawlConfig, LoggingConfig};
pub use http_client::{HttpClient, HttpClientConfig};
pub use parsing::{
    DocumentParser, ListingPageParser, ParsingConfig, RecordParser, extract_listing_page, extract_record,
};
pub use parsing_error::{ParsingError, ParsingResult};
