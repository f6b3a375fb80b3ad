//! Site-wide settings shared by the scorer and the metadata generator.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub name_ar: String,
    /// Absolute origin without a trailing slash.
    pub base_url: String,
    /// Home domain; links containing it count as internal.
    pub domain: String,
    /// Default Open Graph image, site-relative or absolute.
    pub og_image: String,
    pub twitter_handle: String,
    pub words_per_minute: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Shifa AlHind".to_string(),
            name_ar: "شفاء الهند".to_string(),
            base_url: "https://shifaalhind.com".to_string(),
            domain: "shifaalhind.com".to_string(),
            og_image: "/og-image.jpg".to_string(),
            twitter_handle: "@shifaalhind".to_string(),
            words_per_minute: 200,
        }
    }
}

impl SiteConfig {
    /// Load a JSON config file; missing keys keep their defaults.
    ///
    /// `domain` is derived from `base_url` unless the file sets it to
    /// something other than the default.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded site config from {}", path.display());

        let explicit_domain =
            (config.domain != SiteConfig::default().domain).then(|| config.domain.clone());
        let base_url = config.base_url.clone();
        let mut config = config.with_base_url(&base_url)?;
        if let Some(domain) = explicit_domain {
            config.domain = domain;
        }
        Ok(config)
    }

    /// Replace the base URL, deriving the home domain from its host.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|_| AppError::InvalidUrl(base_url.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| AppError::InvalidUrl(base_url.to_string()))?;

        self.domain = host.trim_start_matches("www.").to_string();
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// `og_image` as an absolute URL.
    pub fn absolute_og_image(&self) -> String {
        self.absolute(&self.og_image)
    }

    pub fn absolute(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}{}", self.base_url, path_or_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn with_base_url_strips_slash_and_derives_domain() {
        let config = SiteConfig::default()
            .with_base_url("https://www.staging.shifaalhind.com/")
            .unwrap();
        assert_eq!(config.base_url, "https://www.staging.shifaalhind.com");
        assert_eq!(config.domain, "staging.shifaalhind.com");
    }

    #[test]
    fn with_base_url_rejects_relative() {
        assert!(matches!(
            SiteConfig::default().with_base_url("/en"),
            Err(AppError::InvalidUrl(_))
        ));
    }

    #[test]
    fn from_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Test Site", "base_url": "http://localhost:3000"}}"#).unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name, "Test Site");
        assert_eq!(config.domain, "localhost");
        assert_eq!(config.twitter_handle, "@shifaalhind");
        assert_eq!(config.words_per_minute, 200);
    }

    #[test]
    fn from_file_keeps_explicit_domain() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://cdn-front.shifaalhind.com", "domain": "shifaalhind.in"}}"#
        )
        .unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://cdn-front.shifaalhind.com");
        assert_eq!(config.domain, "shifaalhind.in");
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = SiteConfig::from_file("/definitely/not/here.json").unwrap_err();
        match err {
            AppError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn absolute_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_og_image(), "https://shifaalhind.com/og-image.jpg");
        assert_eq!(config.absolute("https://cdn.x/a.png"), "https://cdn.x/a.png");
    }
}
