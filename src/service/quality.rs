//! Content quality scoring for editorial review.
//!
//! The score is the sum of fixed point bands per factor. Word count, links
//! and images award the first band that matches; each heading level adds its
//! own bonus independently.

use crate::config::SiteConfig;
use crate::domain::models::{ContentQualityMetrics, FactorScore};
use crate::extractor::content_extractor::KeywordAnalyzer;

const MAX_SCORE: u32 = 100;

/// Points for the first `(min, max, points)` band containing `value`.
fn banded(value: usize, bands: &[(usize, usize, u8)]) -> u8 {
    bands
        .iter()
        .find(|(min, max, _)| value >= *min && value <= *max)
        .map(|(_, _, points)| *points)
        .unwrap_or(0)
}

pub struct ContentQualityScorer {
    domain: String,
    words_per_minute: usize,
}

impl Default for ContentQualityScorer {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl ContentQualityScorer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            domain: config.domain.clone(),
            words_per_minute: config.words_per_minute.max(1),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Measure `content` and score it. Never fails; empty content scores
    /// the lowest word-count band only.
    pub fn analyze(&self, content: &str) -> ContentQualityMetrics {
        let word_count = KeywordAnalyzer::word_count(content);
        let reading_time = KeywordAnalyzer::reading_time_at(content, self.words_per_minute);
        let headings = KeywordAnalyzer::extract_headings(content);
        let internal_links = KeywordAnalyzer::extract_internal_links(content, &self.domain).len();
        let external_links = KeywordAnalyzer::extract_external_links(content, &self.domain).len();
        let image_count = KeywordAnalyzer::count_images(content);

        let mut metrics = ContentQualityMetrics {
            word_count,
            reading_time,
            heading_structure: headings.counts(),
            internal_links,
            external_links,
            image_count,
            quality_score: 0,
        };

        let total: u32 = Self::breakdown(&metrics)
            .iter()
            .map(|f| u32::from(f.points))
            .sum();
        metrics.quality_score = total.min(MAX_SCORE) as u8;

        tracing::debug!(
            words = metrics.word_count,
            internal = metrics.internal_links,
            external = metrics.external_links,
            images = metrics.image_count,
            score = metrics.quality_score,
            "Scored content"
        );

        metrics
    }

    /// Points per factor. Their sum is the quality score.
    pub fn breakdown(metrics: &ContentQualityMetrics) -> Vec<FactorScore> {
        let headings = &metrics.heading_structure;

        vec![
            FactorScore {
                key: "word_count",
                label: "Word Count",
                // 1500-2500 ideal, 1000+ acceptable, anything else a token 5
                points: banded(
                    metrics.word_count,
                    &[(1500, 2500, 25), (1000, usize::MAX, 15), (0, usize::MAX, 5)],
                ),
                max_points: 25,
            },
            FactorScore {
                key: "h1",
                label: "Single H1",
                points: if headings.h1_count == 1 { 10 } else { 0 },
                max_points: 10,
            },
            FactorScore {
                key: "h2",
                label: "H2 Sections",
                points: banded(headings.h2_count, &[(3, 8, 15)]),
                max_points: 15,
            },
            FactorScore {
                key: "h3",
                label: "H3 Subsections",
                points: if headings.h3_count >= 2 { 10 } else { 0 },
                max_points: 10,
            },
            FactorScore {
                key: "internal_links",
                label: "Internal Links",
                points: banded(
                    metrics.internal_links,
                    &[(5, 10, 20), (3, usize::MAX, 10)],
                ),
                max_points: 20,
            },
            FactorScore {
                key: "external_links",
                label: "External Links",
                points: banded(
                    metrics.external_links,
                    &[(2, 5, 10), (1, usize::MAX, 5)],
                ),
                max_points: 10,
            },
            FactorScore {
                key: "images",
                label: "Images",
                points: banded(metrics.image_count, &[(2, 5, 10), (1, usize::MAX, 5)]),
                max_points: 10,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DocumentBuilder;

    fn scorer() -> ContentQualityScorer {
        ContentQualityScorer::default()
    }

    #[test]
    fn empty_content_scores_lowest_band() {
        let metrics = scorer().analyze("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.reading_time, 0);
        assert_eq!(metrics.internal_links, 0);
        assert_eq!(metrics.quality_score, 5);
    }

    #[test]
    fn ideal_document_scores_100() {
        let content = DocumentBuilder::new()
            .h1("Heart Surgery in India")
            .h2s(5)
            .h3s(3)
            .internal_links(7)
            .external_links(3)
            .images(3)
            .filler_to_words(2000)
            .build();
        let metrics = scorer().analyze(&content);

        assert_eq!(metrics.word_count, 2000);
        assert_eq!(metrics.heading_structure.h1_count, 1);
        assert_eq!(metrics.heading_structure.h2_count, 5);
        assert_eq!(metrics.heading_structure.h3_count, 3);
        assert_eq!(metrics.internal_links, 7);
        assert_eq!(metrics.external_links, 3);
        assert_eq!(metrics.image_count, 3);
        assert_eq!(metrics.quality_score, 100);
    }

    #[test]
    fn secondary_bands_apply_above_ideal_ranges() {
        let content = DocumentBuilder::new()
            .internal_links(12)
            .external_links(6)
            .images(6)
            .filler_to_words(3000)
            .build();
        let metrics = scorer().analyze(&content);
        let breakdown = ContentQualityScorer::breakdown(&metrics);
        let points = |key: &str| breakdown.iter().find(|f| f.key == key).unwrap().points;

        assert_eq!(points("word_count"), 15);
        assert_eq!(points("internal_links"), 10);
        assert_eq!(points("external_links"), 5);
        assert_eq!(points("images"), 5);
        assert_eq!(metrics.quality_score, 35);
    }

    #[test]
    fn heading_bonuses_are_independent() {
        let content = "# Only\n## A\n## B\n### C\n### D\nbody";
        let metrics = scorer().analyze(content);
        // word 5 + h1 10 + h3 10; two H2s miss the 3-8 band
        assert_eq!(metrics.quality_score, 25);
    }

    #[test]
    fn breakdown_sums_to_score() {
        let content = DocumentBuilder::new()
            .h1("Dental Implants")
            .h2s(2)
            .internal_links(4)
            .external_links(1)
            .images(1)
            .filler_to_words(1200)
            .build();
        let metrics = scorer().analyze(&content);
        let sum: u32 = ContentQualityScorer::breakdown(&metrics)
            .iter()
            .map(|f| u32::from(f.points))
            .sum();
        assert_eq!(sum, u32::from(metrics.quality_score));
        assert_eq!(metrics.quality_score, 15 + 10 + 10 + 5 + 5);
    }

    #[test]
    fn scorer_uses_configured_domain() {
        let config = SiteConfig::default()
            .with_base_url("https://staging.example.org")
            .unwrap();
        let metrics = ContentQualityScorer::new(&config)
            .analyze("[a](https://staging.example.org/en) [b](https://shifaalhind.com/en)");
        assert_eq!(metrics.internal_links, 1);
        assert_eq!(metrics.external_links, 1);
    }
}
