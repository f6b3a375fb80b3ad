use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesDecl, BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use url::Url;

use crate::domain::models::{Locale, SitemapEntry};
use crate::error::{AppError, Result};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// URLs listed in a sitemap, either `<loc>` elements of an XML document or
/// whitespace-separated absolute URLs.
pub fn read_sitemap_urls(text: &str) -> Vec<String> {
    if text.contains("<loc") {
        tracing::debug!("Reading sitemap as XML");
        loc_values(text)
    } else {
        tracing::debug!("Reading sitemap as plain text");
        text.split_whitespace()
            .filter_map(|token| Url::parse(token).ok())
            .map(String::from)
            .collect()
    }
}

/// Text of every `<loc>` element. Entity references inside a location are
/// resolved, so `&amp;` in a query string reads back as `&`.
fn loc_values(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut urls = Vec::new();
    // Some while inside a <loc> element
    let mut current: Option<String> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(
                    "Stopped reading sitemap XML at {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
        };

        match event {
            Event::Start(e) if e.local_name().as_ref() == b"loc" => {
                current = Some(String::new());
            }
            Event::End(e) if e.local_name().as_ref() == b"loc" => {
                if let Some(url) = current.take() {
                    let url = url.trim();
                    if !url.is_empty() {
                        urls.push(url.to_string());
                    }
                }
            }
            Event::Text(e) => {
                if let Some(buf) = current.as_mut() {
                    match e.decode() {
                        Ok(text) => buf.push_str(&text),
                        Err(err) => tracing::warn!("Undecodable <loc> text: {}", err),
                    }
                }
            }
            Event::CData(e) => {
                if let Some(buf) = current.as_mut() {
                    match e.decode() {
                        Ok(text) => buf.push_str(&text),
                        Err(err) => tracing::warn!("Undecodable <loc> CDATA: {}", err),
                    }
                }
            }
            Event::GeneralRef(entity) => {
                if let Some(buf) = current.as_mut() {
                    push_entity(buf, &entity);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    urls
}

fn push_entity(buf: &mut String, entity: &BytesRef<'_>) {
    if let Ok(Some(ch)) = entity.resolve_char_ref() {
        buf.push(ch);
        return;
    }
    let Ok(name) = entity.decode() else {
        tracing::warn!("Undecodable entity reference in <loc>");
        return;
    };
    match resolve_predefined_entity(&name) {
        Some(resolved) => buf.push_str(resolved),
        None => {
            tracing::warn!("Unknown entity &{}; kept as written", name);
            buf.push('&');
            buf.push_str(&name);
            buf.push(';');
        }
    }
}

/// A sitemap entry plus its language alternates (`hreflang` → URL).
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    pub entry: SitemapEntry,
    pub alternates: Vec<(String, String)>,
}

/// Collects entries and writes them as a `urlset` document.
#[derive(Debug, Default)]
pub struct SitemapBuilder {
    urls: Vec<SitemapUrl>,
}

impl SitemapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SitemapEntry) -> &mut Self {
        self.urls.push(SitemapUrl {
            entry,
            alternates: Vec::new(),
        });
        self
    }

    pub fn push_with_alternates(
        &mut self,
        entry: SitemapEntry,
        alternates: Vec<(String, String)>,
    ) -> &mut Self {
        self.urls.push(SitemapUrl { entry, alternates });
        self
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        let with_alternates = self.urls.iter().any(|u| !u.alternates.is_empty());

        write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        if with_alternates {
            urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
        }
        write(&mut writer, Event::Start(urlset))?;

        for url in &self.urls {
            write(&mut writer, Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", &url.entry.url)?;
            write_text_element(&mut writer, "lastmod", &url.entry.last_modified)?;
            write_text_element(&mut writer, "changefreq", url.entry.change_frequency.as_str())?;
            write_text_element(&mut writer, "priority", &format!("{:.1}", url.entry.priority))?;

            for (lang, href) in &url.alternates {
                let mut link = BytesStart::new("xhtml:link");
                link.push_attribute(("rel", "alternate"));
                link.push_attribute(("hreflang", lang.as_str()));
                link.push_attribute(("href", href.as_str()));
                write(&mut writer, Event::Empty(link))?;
            }

            write(&mut writer, Event::End(BytesEnd::new("url")))?;
        }

        write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

        String::from_utf8(writer.into_inner()).map_err(|e| AppError::sitemap(e.to_string()))
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| AppError::sitemap(e.to_string()))
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

/// Language alternates for a site-relative path, one per locale.
pub fn locale_alternates(base_url: &str, path: &str) -> Vec<(String, String)> {
    Locale::ALL
        .iter()
        .map(|locale| {
            (
                locale.as_str().to_string(),
                format!("{}/{}{}", base_url, locale.as_str(), path),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ChangeFrequency;

    fn entry(url: &str) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            last_modified: "2024-05-01T00:00:00.000Z".to_string(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        }
    }

    #[test]
    fn test_loc_elements_are_read() {
        let xml = r#"<urlset><url><loc> https://shifaalhind.com/en </loc><lastmod>2024-01-01</lastmod></url>
<url><loc><![CDATA[https://shifaalhind.com/ar]]></loc></url></urlset>"#;
        assert_eq!(
            read_sitemap_urls(xml),
            vec!["https://shifaalhind.com/en", "https://shifaalhind.com/ar"]
        );
    }

    #[test]
    fn test_entities_in_loc_are_resolved() {
        let xml = "<urlset><url><loc>https://x.com/a?b=1&amp;c=2&#38;d=&lt;3&gt;</loc></url></urlset>";
        assert_eq!(read_sitemap_urls(xml), vec!["https://x.com/a?b=1&c=2&d=<3>"]);
    }

    #[test]
    fn test_extract_plain_text_urls() {
        let text = "https://shifaalhind.com/en/\nhttps://shifaalhind.com/ar/\nnot-a-url";
        let urls = read_sitemap_urls(text);
        assert_eq!(urls, vec!["https://shifaalhind.com/en/", "https://shifaalhind.com/ar/"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_sitemap_urls("").is_empty());
    }

    #[test]
    fn test_written_sitemap_reads_back() {
        let mut builder = SitemapBuilder::new();
        builder
            .push(entry("https://shifaalhind.com/en/about"))
            .push(entry("https://shifaalhind.com/ar/about"));
        let xml = builder.to_xml().unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(!xml.contains("xmlns:xhtml"));
        assert_eq!(
            read_sitemap_urls(&xml),
            vec![
                "https://shifaalhind.com/en/about",
                "https://shifaalhind.com/ar/about"
            ]
        );
    }

    #[test]
    fn test_alternates_written_as_xhtml_links() {
        let mut builder = SitemapBuilder::new();
        builder.push_with_alternates(
            entry("https://shifaalhind.com/en/faq"),
            locale_alternates("https://shifaalhind.com", "/faq"),
        );
        let xml = builder.to_xml().unwrap();

        assert!(xml.contains(r#"xmlns:xhtml="http://www.w3.org/1999/xhtml""#));
        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="ar" href="https://shifaalhind.com/ar/faq"/>"#
        ));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut builder = SitemapBuilder::new();
        builder.push(entry("https://shifaalhind.com/en/search?q=a&b=c"));
        let xml = builder.to_xml().unwrap();
        assert!(xml.contains("q=a&amp;b=c"));
    }
    #[test]
    fn test_query_string_url_round_trips() {
        let url = "https://shifaalhind.com/en/search?q=a&b=c";
        let mut builder = SitemapBuilder::new();
        builder.push_with_alternates(
            entry(url),
            locale_alternates("https://shifaalhind.com", "/search"),
        );
        let xml = builder.to_xml().unwrap();
        assert_eq!(read_sitemap_urls(&xml), vec![url]);
    }
}
