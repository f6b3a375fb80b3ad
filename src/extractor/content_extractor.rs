//! Text statistics over page prose written in line-oriented markdown.
//!
//! Headings, links and images are found with regular expressions; nothing
//! here renders markdown.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

use crate::domain::models::HeadingStructure;

/// Average adult reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

pub const DEFAULT_META_DESCRIPTION_LEN: usize = 160;

/// A markdown link `[label](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    pub label: String,
    pub url: String,
}

fn heading_regex(level: usize) -> &'static Regex {
    static H1: OnceLock<Regex> = OnceLock::new();
    static H2: OnceLock<Regex> = OnceLock::new();
    static H3: OnceLock<Regex> = OnceLock::new();
    let cell = match level {
        1 => &H1,
        2 => &H2,
        _ => &H3,
    };
    cell.get_or_init(|| {
        Regex::new(&format!(r"(?m)^#{{{}}}[ \t]+(.+?)\r?$", level)).unwrap()
    })
}

fn link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap())
}

fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap())
}

fn sentence_split_regex() -> &'static Regex {
    static SENTENCE: OnceLock<Regex> = OnceLock::new();
    SENTENCE.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    /// Whitespace-delimited token count.
    pub fn word_count(content: &str) -> usize {
        content.split_whitespace().count()
    }

    /// Percentage of content tokens that start an occurrence of `keyword`.
    ///
    /// Both sides are lowercased and split on whitespace; every window of the
    /// keyword's length is compared. Empty content or keyword yields 0.
    pub fn calculate_keyword_density(content: &str, keyword: &str) -> f64 {
        let words: Vec<String> = content
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        let keyword_words: Vec<String> = keyword
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() || keyword_words.is_empty() || words.len() < keyword_words.len() {
            return 0.0;
        }

        let count = words
            .windows(keyword_words.len())
            .filter(|window| *window == keyword_words.as_slice())
            .count();

        100.0 * count as f64 / words.len() as f64
    }

    pub fn extract_headings(content: &str) -> HeadingStructure {
        let capture = |level: usize| -> Vec<String> {
            heading_regex(level)
                .captures_iter(content)
                .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
                .collect()
        };

        HeadingStructure {
            h1: capture(1),
            h2: capture(2),
            h3: capture(3),
        }
    }

    /// Minutes at [`WORDS_PER_MINUTE`], rounded up. Zero words read in zero
    /// minutes.
    pub fn calculate_reading_time(content: &str) -> usize {
        Self::reading_time_at(content, WORDS_PER_MINUTE)
    }

    pub fn reading_time_at(content: &str, words_per_minute: usize) -> usize {
        Self::word_count(content).div_ceil(words_per_minute.max(1))
    }

    /// Lowercase, hyphen-separated ASCII slug. Idempotent.
    pub fn generate_slug(text: &str) -> String {
        static STRIP: OnceLock<Regex> = OnceLock::new();
        static SEPARATORS: OnceLock<Regex> = OnceLock::new();
        let strip = STRIP.get_or_init(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
        let separators = SEPARATORS.get_or_init(|| Regex::new(r"[\s_-]+").unwrap());

        let lowered = text.to_lowercase();
        let stripped = strip.replace_all(lowered.trim(), "");
        let hyphenated = separators.replace_all(&stripped, "-");
        hyphenated.trim_matches('-').to_string()
    }

    /// Every `[label](url)` in document order. Images with a non-empty alt
    /// text match too.
    pub fn extract_links(content: &str) -> Vec<MarkdownLink> {
        link_regex()
            .captures_iter(content)
            .map(|c| MarkdownLink {
                label: c[1].to_string(),
                url: c[2].to_string(),
            })
            .collect()
    }

    /// Link targets on `domain` or site-relative (`/...`). Duplicates kept.
    pub fn extract_internal_links(content: &str, domain: &str) -> Vec<String> {
        Self::extract_links(content)
            .into_iter()
            .filter(|link| link.url.contains(domain) || link.url.starts_with('/'))
            .map(|link| link.url)
            .collect()
    }

    /// Absolute http(s) link targets that do not point at `domain`.
    pub fn extract_external_links(content: &str, domain: &str) -> Vec<String> {
        Self::extract_links(content)
            .into_iter()
            .filter(|link| {
                (link.url.starts_with("http://") || link.url.starts_with("https://"))
                    && !link.url.contains(domain)
            })
            .map(|link| link.url)
            .collect()
    }

    /// Occurrences of `![alt](url)`.
    pub fn count_images(content: &str) -> usize {
        image_regex().find_iter(content).count()
    }

    /// Build a description from whole leading sentences that fit in
    /// `max_len` characters.
    ///
    /// When the sentences add up to less than 80% of `max_len`, the content
    /// itself is truncated to `max_len - 3` characters and ellipsized instead.
    pub fn generate_meta_description(content: &str, max_len: usize) -> String {
        let mut description = String::new();
        let mut len = 0usize;

        for sentence in sentence_split_regex().split(content) {
            let trimmed = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
            if trimmed.is_empty() {
                continue;
            }
            let sentence_len = trimmed.chars().count();
            let separator = usize::from(!description.is_empty());
            if len + sentence_len + separator > max_len {
                break;
            }
            if separator == 1 {
                description.push(' ');
            }
            description.push_str(&trimmed);
            len += sentence_len + separator;
        }

        if (len as f64) >= max_len as f64 * 0.8 {
            return description;
        }

        let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.chars().count() <= max_len {
            return normalized;
        }
        let cut: String = normalized.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }

    /// Path segments below the locale segment. `https://site.com/en/a/b` is
    /// at depth 2; a locale root is at depth 0.
    pub fn linking_depth(url: &str) -> usize {
        let segments: Vec<String> = match Url::parse(url) {
            Ok(parsed) => parsed
                .path_segments()
                .map(|s| s.filter(|p| !p.is_empty()).map(str::to_string).collect())
                .unwrap_or_default(),
            Err(_) => url
                .split(['?', '#'])
                .next()
                .unwrap_or("")
                .split('/')
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        };
        segments.len().saturating_sub(1)
    }
}
