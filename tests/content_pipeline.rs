//! End-to-end checks of the public API: content scoring, validation and
//! metadata generation as the page layer uses them.

use medtour_seo::domain::blocks::ContentBlock;
use medtour_seo::domain::models::{Locale, SeoPageInput, SitemapOptions};
use medtour_seo::extractor::{read_sitemap_urls, SitemapBuilder};
use medtour_seo::service::{
    ContentQualityScorer, MetadataGenerator, PageMetadataInput, SeoValidator,
};
use medtour_seo::test_utils::{words, DocumentBuilder};
use medtour_seo::{KeywordAnalyzer, SiteConfig};

#[test]
fn test_ideal_article_scores_full_marks() {
    let content = DocumentBuilder::new()
        .h1("Knee Replacement in Bangalore for GCC Patients")
        .h2s(5)
        .h3s(3)
        .internal_links(7)
        .external_links(3)
        .images(3)
        .filler_to_words(2000)
        .build();

    let metrics = ContentQualityScorer::default().analyze(&content);
    assert_eq!(metrics.word_count, 2000);
    assert_eq!(metrics.reading_time, 10);
    assert_eq!(metrics.quality_score, 100);
}

#[test]
fn test_reading_time_boundaries() {
    assert_eq!(KeywordAnalyzer::calculate_reading_time(""), 0);
    assert_eq!(KeywordAnalyzer::calculate_reading_time(&words(199)), 1);
    assert_eq!(KeywordAnalyzer::calculate_reading_time(&words(200)), 1);
    assert_eq!(KeywordAnalyzer::calculate_reading_time(&words(201)), 2);
}

#[test]
fn test_validate_empty_page() {
    let result = SeoValidator::validate(&SeoPageInput::default());
    assert!(!result.is_valid);
    for expected in ["Title is required", "Meta description is required", "H1 is required"] {
        assert!(result.errors.iter().any(|e| e == expected), "missing {}", expected);
    }
    assert_eq!(result.score, 40);
}

#[test]
fn test_validate_page_from_json() {
    let body = DocumentBuilder::new()
        .h1("Cancer Treatment in India")
        .h2s(4)
        .filler_to_words(600)
        .build();
    let json = serde_json::json!({
        "title": "Cancer Treatment in India for UAE Citizens",
        "metaDescription": "x".repeat(130),
        "h1": "Cancer Treatment in India",
        "content": body,
        "url": "/en/treatments/cancer-treatment",
        "canonical": "/en/treatments/cancer-treatment",
        "keywords": ["oncology hospital Bangalore"],
    });
    let input: SeoPageInput = serde_json::from_value(json).unwrap();

    let result = SeoValidator::validate(&input);
    assert!(result.is_valid);
    assert_eq!(result.score, 100);
}

#[test]
fn test_hreflang_pair() {
    let links =
        MetadataGenerator::hreflang_links("https://site.com/en/about", &[Locale::En, Locale::Ar]);
    let pairs: Vec<(&str, &str)> = links
        .iter()
        .map(|l| (l.href_lang.as_str(), l.href.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("en-US", "https://site.com/en/about"),
            ("ar-SA", "https://site.com/ar/about"),
        ]
    );
}

#[test]
fn test_keyword_density_example() {
    let density = KeywordAnalyzer::calculate_keyword_density("the cat sat on the mat", "the");
    assert!((density - 33.333).abs() < 0.01);
}

#[test]
fn test_rich_text_block_is_scored_like_markdown() {
    let block = ContentBlock::from_json_str(
        r#"{"kind":"richText","content":"<h1>IVF in Bangalore</h1><h2>Costs</h2><p>See <a href=\"/en/packages\">packages</a> and <a href=\"https://www.who.int\">WHO</a>.</p><img src=\"/ivf.jpg\" alt=\"\">"}"#,
    )
    .unwrap();

    let metrics = ContentQualityScorer::default().analyze(&block.analysis_text());
    assert_eq!(metrics.heading_structure.h1_count, 1);
    assert_eq!(metrics.heading_structure.h2_count, 1);
    assert_eq!(metrics.internal_links, 1);
    assert_eq!(metrics.external_links, 1);
    assert_eq!(metrics.image_count, 1);
}

#[test]
fn test_sitemap_for_staging_site() {
    let config = SiteConfig::default()
        .with_base_url("https://staging.shifaalhind.com")
        .unwrap();
    let generator = MetadataGenerator::new(config);
    let mut builder = SitemapBuilder::new();
    for path in ["", "/about", "/treatments"] {
        generator.add_localized_entries(&mut builder, path, &SitemapOptions::default());
    }

    let xml = builder.to_xml().unwrap();
    let urls = read_sitemap_urls(&xml);
    assert_eq!(urls.len(), 6);
    assert_eq!(urls[0], "https://staging.shifaalhind.com/en");
    assert_eq!(urls[5], "https://staging.shifaalhind.com/ar/treatments");
}

#[test]
fn test_arabic_content_is_handled() {
    let content = "# السياحة العلاجية في الهند\n## التكلفة\nنص عربي قصير [الباقات](/ar/packages)";
    let metrics = ContentQualityScorer::default().analyze(content);
    assert_eq!(metrics.heading_structure.h1_count, 1);
    assert_eq!(metrics.internal_links, 1);
    assert_eq!(KeywordAnalyzer::generate_slug("السياحة العلاجية في الهند"), "");
    assert!(KeywordAnalyzer::calculate_keyword_density(content, "التكلفة") > 0.0);
}

#[test]
fn test_meta_output_for_locale_root() {
    let generator = MetadataGenerator::default();
    let input = PageMetadataInput {
        title: "Medical Tourism in India".into(),
        description: "Treatment packages for GCC patients".into(),
        locale: Locale::Ar,
        canonical: Some("/ar".into()),
        ..Default::default()
    };

    let json = serde_json::to_value(generator.page_metadata(&input)).unwrap();
    assert_eq!(json["canonical"], "https://shifaalhind.com/ar");
    assert_eq!(json["hreflang"][0]["hrefLang"], "en-US");
    assert_eq!(json["hreflang"][0]["href"], "https://shifaalhind.com/en");
    assert_eq!(json["hreflang"][1]["hrefLang"], "ar-SA");
    assert_eq!(json["hreflang"][1]["href"], "https://shifaalhind.com/ar");
    assert_eq!(json["alternates"]["en"], json["hreflang"][0]["href"]);
    assert!(json.get("openGraph").is_some());
}

#[test]
fn test_sitemap_with_query_string_audits_full_url() {
    let mut builder = SitemapBuilder::new();
    builder.push(MetadataGenerator::sitemap_entry(
        "https://shifaalhind.com/en/search?q=ivf&city=bangalore",
        &SitemapOptions::default(),
    ));

    let urls = read_sitemap_urls(&builder.to_xml().unwrap());
    assert_eq!(urls, vec!["https://shifaalhind.com/en/search?q=ivf&city=bangalore"]);
}
