pub mod content_extractor;
pub mod sitemap;

pub use content_extractor::{KeywordAnalyzer, MarkdownLink};
pub use sitemap::{read_sitemap_urls, SitemapBuilder};
