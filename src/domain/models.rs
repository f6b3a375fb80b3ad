//! Plain value records produced and consumed by the analyzers.
//!
//! Nothing here is persisted. Every record is built fresh per call and handed
//! back to the caller.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Flat key/value map of `<meta>` tags (`og:title`, `twitter:card`, ...).
pub type TagMap = BTreeMap<String, String>;

// ====== Enums ======

/// The two languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Region tag used in hreflang annotations.
    pub fn region_tag(&self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Ar => "ar-SA",
        }
    }

    /// Region tag in the underscore form Open Graph expects.
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Ar => "ar_SA",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(AppError::InvalidLocale(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl FromStr for ChangeFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(ChangeFrequency::Always),
            "hourly" => Ok(ChangeFrequency::Hourly),
            "daily" => Ok(ChangeFrequency::Daily),
            "weekly" => Ok(ChangeFrequency::Weekly),
            "monthly" => Ok(ChangeFrequency::Monthly),
            "yearly" => Ok(ChangeFrequency::Yearly),
            "never" => Ok(ChangeFrequency::Never),
            other => Err(AppError::invalid(
                "change_frequency",
                format!("unknown value '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A mandatory field is missing; the page is not ready for indexing.
    Error,
    /// Sub-optimal but acceptable.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

// ====== Content analysis ======

/// Heading texts per level, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingStructure {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

impl HeadingStructure {
    pub fn counts(&self) -> HeadingCounts {
        HeadingCounts {
            h1_count: self.h1.len(),
            h2_count: self.h2.len(),
            h3_count: self.h3.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingCounts {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQualityMetrics {
    pub word_count: usize,
    /// Minutes, rounded up.
    pub reading_time: usize,
    pub heading_structure: HeadingCounts,
    pub internal_links: usize,
    pub external_links: usize,
    pub image_count: usize,
    /// 0-100
    pub quality_score: u8,
}

/// Points awarded for one factor of the quality score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub key: &'static str,
    pub label: &'static str,
    pub points: u8,
    pub max_points: u8,
}

// ====== Validation ======

/// Page fields checked by the validator. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoPageInput {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub canonical: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoFinding {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
    pub deduction: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// 0-100
    pub score: u8,
}

// ====== Metadata ======

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub rel: String,
    #[serde(rename = "hrefLang")]
    pub href_lang: String,
    pub href: String,
}

/// Inputs for the Open Graph and Twitter Card tag maps.
#[derive(Debug, Clone, Default)]
pub struct SocialTagInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub og_type: Option<String>,
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    /// ISO-8601 timestamp
    pub last_modified: String,
    pub change_frequency: ChangeFrequency,
    /// 0.0-1.0
    pub priority: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SitemapOptions {
    pub last_modified: Option<String>,
    pub change_frequency: Option<ChangeFrequency>,
    pub priority: Option<f64>,
}
