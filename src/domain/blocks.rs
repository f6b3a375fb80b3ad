//! Rich-text content blocks stored alongside blog posts and pages.
//!
//! Blocks arrive as JSON of loosely known shape. They are validated into a
//! [`ContentBlock`] before anything renders or analyzes them.

use scraper::{node::Node, ElementRef, Html};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Shown in place of a block that fails validation.
pub const PLACEHOLDER: &str = "Content coming soon.";

const RICH_TEXT_KIND: &str = "richText";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    RichText { content: String },
}

impl ContentBlock {
    /// Validate a JSON value. `kind` may be omitted; when present it must be
    /// `"richText"`. `content` must be a string.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| AppError::content_block("block is not a JSON object"))?;

        match obj.get("kind") {
            None | Some(Value::Null) => {}
            Some(Value::String(kind)) if kind == RICH_TEXT_KIND => {}
            Some(other) => {
                return Err(AppError::content_block(format!(
                    "unsupported block kind {}",
                    other
                )))
            }
        }

        match obj.get("content") {
            Some(Value::String(content)) => Ok(ContentBlock::RichText {
                content: content.clone(),
            }),
            Some(_) => Err(AppError::content_block("`content` is not a string")),
            None => Err(AppError::content_block("missing `content`")),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }

    /// Raw HTML of the block, or [`PLACEHOLDER`] when the value is not a
    /// valid block.
    pub fn render_or_placeholder(value: &Value) -> String {
        match Self::from_json(value) {
            Ok(ContentBlock::RichText { content }) => content,
            Err(e) => {
                tracing::warn!("Falling back to placeholder: {}", e);
                PLACEHOLDER.to_string()
            }
        }
    }

    pub fn html(&self) -> &str {
        match self {
            ContentBlock::RichText { content } => content,
        }
    }

    /// Rewrite the block's HTML into the line-oriented markdown the
    /// keyword analyzer understands.
    pub fn analysis_text(&self) -> String {
        let fragment = Html::parse_fragment(self.html());
        let mut out = String::new();
        render_children(fragment.root_element(), &mut out);
        out
    }
}

fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            render_element(el, out);
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}

fn render_element(el: ElementRef<'_>, out: &mut String) {
    match el.value().name() {
        tag @ ("h1" | "h2" | "h3") => {
            let level = if tag == "h1" { 1 } else if tag == "h2" { 2 } else { 3 };
            let text = collapsed_text(el);
            if text.is_empty() {
                return;
            }
            out.push('\n');
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(&text);
            out.push('\n');
        }
        "a" => match el.value().attr("href").map(str::trim) {
            Some(href) if !href.is_empty() => {
                let text = collapsed_text(el);
                let label = if text.is_empty() { href } else { text.as_str() };
                out.push_str(&format!("[{}]({})", label, href));
            }
            _ => render_children(el, out),
        },
        "img" => {
            if let Some(src) = el.value().attr("src").map(str::trim).filter(|s| !s.is_empty()) {
                let alt = el.value().attr("alt").unwrap_or("").trim();
                out.push_str(&format!("![{}]({})", alt, src));
            }
        }
        "br" => out.push('\n'),
        "p" | "div" | "li" | "ul" | "ol" | "section" | "blockquote" | "h4" | "h5" | "h6" => {
            out.push('\n');
            render_children(el, out);
            out.push('\n');
        }
        "script" | "style" => {}
        _ => render_children(el, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_block_without_kind() {
        let block = ContentBlock::from_json(&json!({ "content": "<p>Hi</p>" })).unwrap();
        assert_eq!(block.html(), "<p>Hi</p>");
    }

    #[test]
    fn accepts_rich_text_kind() {
        let block =
            ContentBlock::from_json(&json!({ "kind": "richText", "content": "x" })).unwrap();
        assert_eq!(block, ContentBlock::RichText { content: "x".into() });
    }

    #[test]
    fn rejects_missing_content_and_unknown_kind() {
        assert!(ContentBlock::from_json(&json!({ "kind": "richText" })).is_err());
        assert!(ContentBlock::from_json(&json!({ "kind": "video", "content": "x" })).is_err());
        assert!(ContentBlock::from_json(&json!({ "content": 42 })).is_err());
        assert!(ContentBlock::from_json(&json!("just a string")).is_err());
    }

    #[test]
    fn placeholder_on_invalid_block() {
        assert_eq!(ContentBlock::render_or_placeholder(&json!({})), PLACEHOLDER);
        assert_eq!(
            ContentBlock::render_or_placeholder(&json!({ "content": "<b>ok</b>" })),
            "<b>ok</b>"
        );
    }

    #[test]
    fn analysis_text_maps_html_to_markdown() {
        let block = ContentBlock::RichText {
            content: r#"<h1>IVF in  Bangalore</h1><p>Read our <a href="/en/treatments">treatments</a> guide.</p><h2>Costs</h2><img src="/a.jpg" alt="">"#.into(),
        };
        let text = block.analysis_text();
        assert!(text.contains("\n# IVF in Bangalore\n"));
        assert!(text.contains("\n## Costs\n"));
        assert!(text.contains("[treatments](/en/treatments)"));
        assert!(text.contains("![](/a.jpg)"));
    }
}
