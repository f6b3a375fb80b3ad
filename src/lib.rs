//! Content quality scoring, SEO validation and `<head>` metadata generation
//! for the Shifa AlHind medical-tourism site.

pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod lifecycle;
pub mod service;
pub mod test_utils;

pub use config::SiteConfig;
pub use domain::models::{
    ContentQualityMetrics, HeadingStructure, HreflangLink, Locale, SeoPageInput,
    SeoValidationResult, SitemapEntry,
};
pub use error::{AppError, Result};
pub use extractor::KeywordAnalyzer;
pub use service::{ContentQualityScorer, MetadataGenerator, SeoValidator};
