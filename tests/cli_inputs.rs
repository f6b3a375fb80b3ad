//! File-based inputs as the command-line front end reads them.

use std::io::Write;

use medtour_seo::domain::blocks::ContentBlock;
use medtour_seo::{AppError, SeoPageInput, SeoValidator, SiteConfig};

#[test]
fn test_config_file_drives_scorer_domain() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"base_url": "https://www.example-clinic.org/"}}"#).unwrap();

    let config = SiteConfig::from_file(file.path()).unwrap();
    assert_eq!(config.base_url, "https://www.example-clinic.org");
    assert_eq!(config.domain, "example-clinic.org");
    assert_eq!(config.name, "Shifa AlHind");
}

#[test]
fn test_malformed_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(matches!(
        SiteConfig::from_file(file.path()),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_page_json_with_unknown_fields_still_validates() {
    let input: SeoPageInput =
        serde_json::from_str(r#"{"title": "", "slug": "ignored", "keywords": []}"#).unwrap();
    let result = SeoValidator::validate(&input);
    assert_eq!(result.errors.len(), 3);
    assert_eq!(result.score, 40);
}

#[test]
fn test_content_block_json_errors() {
    assert!(matches!(
        ContentBlock::from_json_str("{broken"),
        Err(AppError::Json(_))
    ));
    assert!(matches!(
        ContentBlock::from_json_str(r#"{"kind":"gallery"}"#),
        Err(AppError::ContentBlock(_))
    ));
}
