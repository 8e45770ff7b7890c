//! # Page Metadata
//!
//! Renders a flat page metadata object into document head tags: title,
//! description, canonical link, Open Graph and Twitter card tags, and an
//! optional JSON-LD structured data block.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::page_meta::PageMeta;
//!
//! let meta = PageMeta::new(
//!     "Yarn Yardage Calculator",
//!     "Estimate how much yarn your blanket needs.",
//!     "https://example.com/tools/yardage",
//! );
//! let head = meta.render_head().unwrap();
//! assert!(head.contains("<title>Yarn Yardage Calculator</title>"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StitchError, StitchResult};

/// Metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// schema.org payload emitted as `application/ld+json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Value>,
}

impl PageMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Self {
        PageMeta {
            title: title.into(),
            description: description.into(),
            canonical_url: canonical_url.into(),
            image_url: None,
            site_name: None,
            structured_data: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = Some(name.into());
        self
    }

    pub fn with_structured_data(mut self, data: serde_json::Value) -> Self {
        self.structured_data = Some(data);
        self
    }

    pub fn validate(&self) -> StitchResult<()> {
        if self.title.trim().is_empty() {
            return Err(StitchError::invalid_input("title", "Title must not be empty"));
        }
        let url = self.canonical_url.trim();
        if url.is_empty() {
            return Err(StitchError::invalid_input("canonical_url", "Canonical URL must not be empty"));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(StitchError::invalid_input(
                "canonical_url",
                format!("'{}' is not an absolute http(s) URL", url),
            ));
        }
        Ok(())
    }

    /// Render head tags, one per line.
    pub fn render_head(&self) -> StitchResult<String> {
        self.validate()?;

        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let url = escape_html(self.canonical_url.trim());

        let mut lines = Vec::new();
        lines.push(format!("<title>{}</title>", title));
        lines.push(format!(r#"<meta name="description" content="{}">"#, description));
        lines.push(format!(r#"<link rel="canonical" href="{}">"#, url));
        lines.push(r#"<meta property="og:type" content="website">"#.to_string());
        lines.push(format!(r#"<meta property="og:title" content="{}">"#, title));
        lines.push(format!(r#"<meta property="og:description" content="{}">"#, description));
        lines.push(format!(r#"<meta property="og:url" content="{}">"#, url));
        if let Some(site) = &self.site_name {
            lines.push(format!(r#"<meta property="og:site_name" content="{}">"#, escape_html(site)));
        }
        let card = if self.image_url.is_some() { "summary_large_image" } else { "summary" };
        lines.push(format!(r#"<meta name="twitter:card" content="{}">"#, card));
        lines.push(format!(r#"<meta name="twitter:title" content="{}">"#, title));
        lines.push(format!(r#"<meta name="twitter:description" content="{}">"#, description));
        if let Some(image) = &self.image_url {
            let image = escape_html(image);
            lines.push(format!(r#"<meta property="og:image" content="{}">"#, image));
            lines.push(format!(r#"<meta name="twitter:image" content="{}">"#, image));
        }
        if let Some(data) = &self.structured_data {
            let json = escape_script_json(&serde_json::to_string(data)?);
            lines.push(format!(r#"<script type="application/ld+json">{}</script>"#, json));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

/// Escape text for HTML element content and double-quoted attributes
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Keep serialized JSON from terminating the surrounding script element.
/// The replacements are valid JSON string escapes, so the payload parses unchanged.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
