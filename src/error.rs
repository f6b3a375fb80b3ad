//! Error types for the SEO toolkit.
//!
//! The analysis functions themselves are total and never fail. Errors only
//! come from parse boundaries:
//! - `AppError`: domain-specific failures (bad locale, bad content block, ...)
//! - `Result<T>`: type alias for Results using AppError

use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Domain-specific errors raised while reading inputs or writing outputs.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Locale tag outside the supported set
    #[error("Unsupported locale: {0} (expected \"en\" or \"ar\")")]
    InvalidLocale(String),

    /// A value that could not be parsed into the expected shape
    #[error("Invalid {field}: {message}")]
    InvalidArgument { field: &'static str, message: String },

    /// Rich-text block without the expected structure
    #[error("Content block error: {0}")]
    ContentBlock(String),

    /// Sitemap document could not be written
    #[error("Sitemap error: {0}")]
    Sitemap(String),

    /// Site configuration is not valid JSON
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Create an invalid-argument error
    pub fn invalid(field: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: msg.into(),
        }
    }

    /// Create a content block error
    pub fn content_block(msg: impl Into<String>) -> Self {
        Self::ContentBlock(msg.into())
    }

    /// Create a sitemap error
    pub fn sitemap(msg: impl Into<String>) -> Self {
        Self::Sitemap(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
