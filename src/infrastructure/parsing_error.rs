//! Parsing error types for listing and detail page extraction
//!
//! Errors fall into two classes. Structural errors abort the extraction call.
//! Field errors are recoverable: extractors log them and leave the affected
//! field at its empty value.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("HTML parsing failed: {message}")]
    HtmlParsingFailed { message: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Pagination indicator '{indicator}' is not a page number: {value:?}")]
    InvalidPaginationIndicator { indicator: String, value: String },

    #[error("Field '{field}' could not be parsed from {input:?}: {reason}")]
    FieldParseFailed {
        field: String,
        input: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String, field: String },
}

impl ParsingError {
    /// Create a field parse error for a malformed text fragment
    pub fn field_parse_failed(field: &str, input: &str, reason: impl ToString) -> Self {
        Self::FieldParseFailed {
            field: field.to_string(),
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid selector error
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a document level parse failure
    pub fn html_parsing_failed(message: impl ToString) -> Self {
        Self::HtmlParsingFailed {
            message: message.to_string(),
        }
    }

    /// Check if this error only affects a single field
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::FieldParseFailed { .. } => true,
            Self::HtmlParsingFailed { .. }
            | Self::InvalidSelector { .. }
            | Self::InvalidPaginationIndicator { .. }
            | Self::ConfigurationError { .. } => false,
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
