//! `<head>` metadata for rendered pages: titles, canonicals, social tags,
//! hreflang alternates and sitemap entries.
//!
//! All functions are pure apart from [`MetadataGenerator::sitemap_entry`],
//! which stamps the current time when no modification time is given.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::domain::keywords::base_keywords;
use crate::domain::models::{
    HreflangLink, Locale, SitemapEntry, SitemapOptions, SocialTagInput, TagMap,
};
use crate::extractor::sitemap::{locale_alternates, SitemapBuilder};

pub const DEFAULT_OG_TYPE: &str = "website";
pub const TWITTER_CARD: &str = "summary_large_image";
pub const DEFAULT_PRIORITY: f64 = 0.8;
const OG_IMAGE_WIDTH: &str = "1200";
const OG_IMAGE_HEIGHT: &str = "630";

fn locale_segment_regex() -> &'static Regex {
    static SEGMENT: OnceLock<Regex> = OnceLock::new();
    SEGMENT.get_or_init(|| Regex::new(r"/(en|ar)/").unwrap())
}

fn is_locale_root(url: &str) -> bool {
    Locale::ALL
        .iter()
        .any(|l| url.strip_suffix(l.as_str()).is_some_and(|rest| rest.ends_with('/')))
}

/// Everything the page layer needs to fill one page's `<head>`.
#[derive(Debug, Clone, Default)]
pub struct PageMetadataInput {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub locale: Locale,
    /// Site-relative canonical path, e.g. `/en/treatments/ivf-bangalore`.
    pub canonical: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub noindex: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    /// Language code (`en`, `ar`, `x-default`) to absolute URL.
    pub alternates: BTreeMap<String, String>,
    /// `<link rel="alternate">` entries built from `canonical`.
    pub hreflang: Vec<HreflangLink>,
    pub robots: String,
    pub open_graph: TagMap,
    pub twitter: TagMap,
}

pub struct MetadataGenerator {
    config: SiteConfig,
}

impl Default for MetadataGenerator {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

impl MetadataGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// `"{title} | {site name}"`
    pub fn full_title(&self, title: &str) -> String {
        format!("{} | {}", title, self.config.name)
    }

    /// Base URL joined with `path`, or the bare base URL.
    pub fn canonical_url(&self, path: Option<&str>) -> String {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => format!("{}{}", self.config.base_url, path),
            None => self.config.base_url.clone(),
        }
    }

    /// Curated keywords for `locale` followed by the page's own, duplicates
    /// kept.
    pub fn keywords(&self, locale: Locale, page_keywords: &[String]) -> Vec<String> {
        base_keywords(locale)
            .iter()
            .map(|k| k.to_string())
            .chain(page_keywords.iter().cloned())
            .collect()
    }

    pub fn open_graph_tags(&self, input: &SocialTagInput) -> TagMap {
        let mut tags = TagMap::new();
        tags.insert("og:title".into(), input.title.clone());
        tags.insert("og:description".into(), input.description.clone());
        tags.insert("og:url".into(), input.url.clone());
        tags.insert("og:site_name".into(), self.config.name.clone());
        tags.insert(
            "og:type".into(),
            input
                .og_type
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_OG_TYPE.to_string()),
        );
        tags.insert(
            "og:locale".into(),
            input.locale.unwrap_or_default().og_locale().to_string(),
        );
        if let Some(image) = input.image.as_ref().filter(|i| !i.is_empty()) {
            tags.insert("og:image".into(), image.clone());
        }
        tags
    }

    pub fn twitter_card_tags(&self, input: &SocialTagInput) -> TagMap {
        let mut tags = TagMap::new();
        tags.insert("twitter:card".into(), TWITTER_CARD.to_string());
        tags.insert("twitter:title".into(), input.title.clone());
        tags.insert("twitter:description".into(), input.description.clone());
        if let Some(image) = input.image.as_ref().filter(|i| !i.is_empty()) {
            tags.insert("twitter:image".into(), image.clone());
        }
        tags
    }

    /// One alternate per locale, made by swapping the first `/en/` or `/ar/`
    /// segment of `base_url`. A URL without such a segment is used as is.
    pub fn hreflang_links(base_url: &str, locales: &[Locale]) -> Vec<HreflangLink> {
        let segment = locale_segment_regex();
        if !segment.is_match(base_url) {
            tracing::warn!("No locale segment in {}, hreflang hrefs left unchanged", base_url);
        }

        locales
            .iter()
            .map(|locale| HreflangLink {
                rel: "alternate".to_string(),
                href_lang: locale.region_tag().to_string(),
                href: segment
                    .replace(base_url, format!("/{}/", locale.as_str()).as_str())
                    .into_owned(),
            })
            .collect()
    }

    /// Sitemap record with defaults: now, weekly, priority 0.8.
    pub fn sitemap_entry(url: &str, options: &SitemapOptions) -> SitemapEntry {
        Self::sitemap_entry_at(url, options, Utc::now())
    }

    pub fn sitemap_entry_at(url: &str, options: &SitemapOptions, now: DateTime<Utc>) -> SitemapEntry {
        let priority = match options.priority {
            Some(p) if !p.is_nan() => p.clamp(0.0, 1.0),
            _ => DEFAULT_PRIORITY,
        };

        SitemapEntry {
            url: url.to_string(),
            last_modified: options
                .last_modified
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            change_frequency: options.change_frequency.unwrap_or_default(),
            priority,
        }
    }

    /// Add one entry per locale for a site-relative `path` (`""` for the
    /// home page), each carrying the full set of language alternates.
    pub fn add_localized_entries(
        &self,
        builder: &mut SitemapBuilder,
        path: &str,
        options: &SitemapOptions,
    ) {
        let alternates = locale_alternates(&self.config.base_url, path);
        for (_, href) in &alternates {
            builder.push_with_alternates(Self::sitemap_entry(href, options), alternates.clone());
        }
    }

    pub fn page_metadata(&self, input: &PageMetadataInput) -> PageMetadata {
        let full_title = self.full_title(&input.title);
        let canonical_path = input.canonical.as_deref().filter(|c| !c.is_empty());
        let canonical = match canonical_path {
            Some(path) => self.canonical_url(Some(path)),
            None => format!("{}/{}", self.config.base_url, input.locale.as_str()),
        };

        let image = input
            .og_image
            .as_deref()
            .filter(|i| !i.is_empty())
            .map(|i| self.config.absolute(i))
            .unwrap_or_else(|| self.config.absolute_og_image());

        let social = SocialTagInput {
            title: full_title.clone(),
            description: input.description.clone(),
            url: canonical.clone(),
            image: Some(image),
            og_type: input.og_type.clone(),
            locale: Some(input.locale),
        };

        let mut open_graph = self.open_graph_tags(&social);
        open_graph.insert("og:image:width".into(), OG_IMAGE_WIDTH.into());
        open_graph.insert("og:image:height".into(), OG_IMAGE_HEIGHT.into());
        open_graph.insert("og:image:alt".into(), input.title.clone());
        if let Some(published) = &input.published_time {
            open_graph.insert("article:published_time".into(), published.clone());
        }
        if let Some(modified) = &input.modified_time {
            open_graph.insert("article:modified_time".into(), modified.clone());
        }

        let mut twitter = self.twitter_card_tags(&social);
        twitter.insert("twitter:site".into(), self.config.twitter_handle.clone());
        twitter.insert("twitter:creator".into(), self.config.twitter_handle.clone());

        let hreflang = Self::page_hreflang(&canonical);

        PageMetadata {
            title: full_title,
            description: input.description.clone(),
            keywords: self.keywords(input.locale, &input.keywords),
            canonical,
            alternates: self.alternates(canonical_path, input.locale),
            hreflang,
            robots: if input.noindex {
                "noindex, nofollow".to_string()
            } else {
                "index, follow".to_string()
            },
            open_graph,
            twitter,
        }
    }

    /// Hreflang links for a resolved canonical URL. A locale root such as
    /// `https://site/ar` has no trailing slash, so one is added for the swap
    /// and dropped again from the hrefs.
    fn page_hreflang(canonical: &str) -> Vec<HreflangLink> {
        if !is_locale_root(canonical) {
            return Self::hreflang_links(canonical, &Locale::ALL);
        }
        let mut links = Self::hreflang_links(&format!("{}/", canonical), &Locale::ALL);
        for link in &mut links {
            link.href.pop();
        }
        links
    }

    fn alternates(&self, canonical_path: Option<&str>, locale: Locale) -> BTreeMap<String, String> {
        let prefix = format!("/{}", locale.as_str());
        let rest = canonical_path
            .and_then(|p| p.strip_prefix(prefix.as_str()))
            .filter(|r| r.is_empty() || r.starts_with('/'))
            .unwrap_or("");

        let mut alternates: BTreeMap<String, String> = locale_alternates(&self.config.base_url, rest)
            .into_iter()
            .collect();
        alternates.insert(
            "x-default".to_string(),
            format!("{}/{}", self.config.base_url, Locale::En.as_str()),
        );
        alternates
    }
}
