//! Editorial SEO checks over a page's metadata fields.
//!
//! Every rule runs on every call and deductions stack. Errors mark missing
//! mandatory fields; warnings mark fields that are present but sub-optimal.

use crate::domain::models::{SeoFinding, SeoPageInput, SeoValidationResult, Severity};
use crate::extractor::content_extractor::KeywordAnalyzer;

const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 60;
const DESCRIPTION_MIN: usize = 120;
const DESCRIPTION_MAX: usize = 160;
const CONTENT_MIN_WORDS: usize = 300;
const URL_MAX: usize = 100;

/// Treat `Some("")` like `None`.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Default)]
pub struct SeoValidator {
    findings: Vec<SeoFinding>,
}

impl SeoValidator {
    pub fn validate(input: &SeoPageInput) -> SeoValidationResult {
        Self::summarize(&Self::findings(input))
    }

    /// Every rule violated by `input`, in rule order.
    pub fn findings(input: &SeoPageInput) -> Vec<SeoFinding> {
        let mut v = SeoValidator::default();
        v.check_title(input);
        v.check_meta_description(input);
        v.check_h1(input);
        v.check_content(input);
        v.check_url(input);
        v.check_canonical(input);
        v.check_keywords(input);
        v.findings
    }

    pub fn summarize(findings: &[SeoFinding]) -> SeoValidationResult {
        let messages = |severity: Severity| -> Vec<String> {
            findings
                .iter()
                .filter(|f| f.severity == severity)
                .map(|f| f.message.clone())
                .collect()
        };
        let errors = messages(Severity::Error);
        let warnings = messages(Severity::Warning);

        let deducted: u32 = findings.iter().map(|f| u32::from(f.deduction)).sum();
        let score = 100u32.saturating_sub(deducted) as u8;

        SeoValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            score,
        }
    }

    fn error(&mut self, field: &'static str, message: &str, deduction: u8) {
        self.push(Severity::Error, field, message, deduction);
    }

    fn warning(&mut self, field: &'static str, message: &str, deduction: u8) {
        self.push(Severity::Warning, field, message, deduction);
    }

    fn push(&mut self, severity: Severity, field: &'static str, message: &str, deduction: u8) {
        self.findings.push(SeoFinding {
            severity,
            field,
            message: message.to_string(),
            deduction,
        });
    }

    fn check_title(&mut self, input: &SeoPageInput) {
        let Some(title) = present(&input.title) else {
            self.error("title", "Title is required", 20);
            return;
        };
        let len = title.chars().count();
        if len < TITLE_MIN {
            self.warning("title", "Title is too short (< 30 characters)", 5);
        }
        if len > TITLE_MAX {
            self.warning("title", "Title is too long (> 60 characters)", 5);
        }
    }

    fn check_meta_description(&mut self, input: &SeoPageInput) {
        let Some(description) = present(&input.meta_description) else {
            self.error("meta_description", "Meta description is required", 15);
            return;
        };
        let len = description.chars().count();
        if len < DESCRIPTION_MIN {
            self.warning(
                "meta_description",
                "Meta description is too short (< 120 characters)",
                5,
            );
        }
        if len > DESCRIPTION_MAX {
            self.warning(
                "meta_description",
                "Meta description is too long (> 160 characters)",
                5,
            );
        }
    }

    fn check_h1(&mut self, input: &SeoPageInput) {
        if present(&input.h1).is_none() {
            self.error("h1", "H1 is required", 15);
        }
    }

    fn check_content(&mut self, input: &SeoPageInput) {
        let Some(content) = present(&input.content) else {
            return;
        };
        if KeywordAnalyzer::word_count(content) < CONTENT_MIN_WORDS {
            self.warning("content", "Content is too short (< 300 words)", 10);
        }

        let headings = KeywordAnalyzer::extract_headings(content).counts();
        if headings.h1_count != 1 {
            self.warning("content", "Page should have exactly one H1 tag", 10);
        }
        if headings.h2_count == 0 {
            self.warning("content", "Page should have at least one H2 tag", 5);
        }
    }

    /// URL rules alone, for auditing sitemap listings.
    pub fn url_findings(url: &str) -> Vec<SeoFinding> {
        let mut v = SeoValidator::default();
        v.check_url_str(url);
        v.findings
    }

    fn check_url(&mut self, input: &SeoPageInput) {
        if let Some(url) = present(&input.url) {
            self.check_url_str(url);
        }
    }

    fn check_url_str(&mut self, url: &str) {
        if url.chars().count() > URL_MAX {
            self.warning("url", "URL is too long (> 100 characters)", 5);
        }
        if url.chars().any(char::is_uppercase) {
            self.warning("url", "URL should be lowercase", 3);
        }
    }

    fn check_canonical(&mut self, input: &SeoPageInput) {
        if present(&input.canonical).is_none() {
            self.warning("canonical", "Canonical URL is recommended", 5);
        }
    }

    fn check_keywords(&mut self, input: &SeoPageInput) {
        if input.keywords.as_ref().map_or(true, |k| k.is_empty()) {
            self.warning("keywords", "Keywords are recommended", 5);
        }
    }
}
