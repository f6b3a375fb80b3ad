use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use medtour_seo::domain::blocks::ContentBlock;
use medtour_seo::domain::models::{ChangeFrequency, Locale, SeoPageInput, SitemapOptions};
use medtour_seo::extractor::{read_sitemap_urls, KeywordAnalyzer, SitemapBuilder};
use medtour_seo::extractor::content_extractor::DEFAULT_META_DESCRIPTION_LEN;
use medtour_seo::lifecycle;
use medtour_seo::service::{
    ContentQualityScorer, MetadataGenerator, PageMetadataInput, SeoValidator,
};
use medtour_seo::SiteConfig;

#[derive(Debug, Parser)]
#[command(name = "medtour-seo", version, about = "SEO tooling for the medical-tourism site")]
struct Cli {
    /// JSON site configuration; missing keys use built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the site base URL
    #[arg(long, global = true, env = "MEDTOUR_SITE_URL")]
    site_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a markdown page (or a `.json` rich-text block)
    Analyze {
        file: PathBuf,
        /// Report density for this keyword (repeatable)
        #[arg(long = "keyword", short = 'k')]
        keywords: Vec<String>,
    },
    /// Check page fields given as JSON ({"title": ..., "metaDescription": ...})
    Validate { file: PathBuf },
    /// Print head metadata for one page
    Meta {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Canonical path, e.g. /en/treatments/ivf-bangalore
        #[arg(long)]
        path: Option<String>,
        #[arg(long, default_value = "en")]
        locale: Locale,
        #[arg(long)]
        image: Option<String>,
        #[arg(long = "keyword", short = 'k')]
        keywords: Vec<String>,
        #[arg(long)]
        og_type: Option<String>,
        #[arg(long)]
        noindex: bool,
    },
    /// Write a sitemap with en/ar entries for each path
    Sitemap {
        /// Path below the locale root ("" for the home page)
        #[arg(long = "path", required = true)]
        paths: Vec<String>,
        #[arg(long)]
        priority: Option<f64>,
        #[arg(long)]
        change_frequency: Option<ChangeFrequency>,
        #[arg(long)]
        last_modified: Option<String>,
    },
    /// List the URLs of an existing sitemap with URL warnings
    AuditSitemap { file: PathBuf },
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    match &cli.site_url {
        Some(url) => Ok(config.with_base_url(url)?),
        None => Ok(config),
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn analyze(config: &SiteConfig, file: &Path, keywords: &[String]) -> Result<()> {
    let raw = read_input(file)?;
    let content = if file.extension().is_some_and(|e| e == "json") {
        ContentBlock::from_json_str(&raw)
            .with_context(|| format!("Invalid content block in {}", file.display()))?
            .analysis_text()
    } else {
        raw
    };

    let scorer = ContentQualityScorer::new(config);
    let metrics = scorer.analyze(&content);
    let headings = KeywordAnalyzer::extract_headings(&content);
    let density: BTreeMap<&str, f64> = keywords
        .iter()
        .map(|k| (k.as_str(), KeywordAnalyzer::calculate_keyword_density(&content, k)))
        .collect();

    print_json(&json!({
        "metrics": metrics,
        "breakdown": ContentQualityScorer::breakdown(&metrics),
        "headings": headings,
        "keywordDensity": density,
        "suggestedSlug": headings.h1.first().map(|h| KeywordAnalyzer::generate_slug(h)),
        "suggestedMetaDescription":
            KeywordAnalyzer::generate_meta_description(&content, DEFAULT_META_DESCRIPTION_LEN),
    }))
}

fn validate(file: &Path) -> Result<bool> {
    let raw = read_input(file)?;
    let input: SeoPageInput = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid page JSON in {}", file.display()))?;

    let findings = SeoValidator::findings(&input);
    let result = SeoValidator::summarize(&findings);
    print_json(&json!({ "result": result, "findings": findings }))?;
    Ok(result.is_valid)
}

fn audit_sitemap(file: &Path) -> Result<()> {
    let urls = read_sitemap_urls(&read_input(file)?);
    tracing::info!("Auditing {} sitemap URLs", urls.len());

    let report: Vec<_> = urls
        .iter()
        .map(|url| {
            let warnings: Vec<String> = SeoValidator::url_findings(url)
                .into_iter()
                .map(|f| f.message)
                .collect();
            json!({
                "url": url,
                "depth": KeywordAnalyzer::linking_depth(url),
                "warnings": warnings,
            })
        })
        .collect();
    print_json(&report)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Analyze { file, keywords } => analyze(&config, &file, &keywords)?,
        Command::Validate { file } => {
            if !validate(&file)? {
                return Ok(ExitCode::from(2));
            }
        }
        Command::Meta {
            title,
            description,
            path,
            locale,
            image,
            keywords,
            og_type,
            noindex,
        } => {
            let generator = MetadataGenerator::new(config);
            let input = PageMetadataInput {
                title,
                description,
                keywords,
                locale,
                canonical: path,
                og_image: image,
                og_type,
                noindex,
                ..Default::default()
            };
            print_json(&generator.page_metadata(&input))?;
        }
        Command::Sitemap {
            paths,
            priority,
            change_frequency,
            last_modified,
        } => {
            let generator = MetadataGenerator::new(config);
            let options = SitemapOptions {
                last_modified,
                change_frequency,
                priority,
            };
            let mut builder = SitemapBuilder::new();
            for path in &paths {
                generator.add_localized_entries(&mut builder, path, &options);
            }
            tracing::info!("Writing sitemap with {} entries", builder.len());
            println!("{}", builder.to_xml()?);
        }
        Command::AuditSitemap { file } => audit_sitemap(&file)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    lifecycle::init_logging();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
