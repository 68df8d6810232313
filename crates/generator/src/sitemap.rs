//! Sitemap generation.
//!
//! Generates a sitemap.xml listing the registered studio pages for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://jabaki.nl/red-studio</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use crate::normalize_base_url;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use seo_kit_core::{ChangeFrequency, Registry, RouteEntry};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Priority used when a non-finite value slips through
const DEFAULT_PRIORITY: f64 = 0.5;

/// A render-ready sitemap record
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Route path (`/red-studio`) or absolute URL
    pub url: String,
    pub lastmod: Option<NaiveDate>,
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
}

impl SitemapEntry {
    pub fn from_route(entry: &RouteEntry, lastmod: Option<NaiveDate>) -> Self {
        Self {
            url: entry.path.clone(),
            lastmod,
            priority: entry.seo.priority,
            change_frequency: entry.seo.change_frequency,
        }
    }
}

/// One entry per registered route, in registration order
pub fn entries_from_registry(registry: &Registry, lastmod: Option<NaiveDate>) -> Vec<SitemapEntry> {
    registry
        .entries()
        .iter()
        .map(|entry| SitemapEntry::from_route(entry, lastmod))
        .collect()
}

/// Render the sitemap document.
///
/// Relative entry URLs are joined onto `base_url` (one trailing slash
/// stripped); entries already starting with `http` are used as-is. An empty
/// slice yields an empty but well-formed `<urlset>`.
pub fn generate_sitemap(entries: &[SitemapEntry], base_url: &str) -> String {
    let base_url = normalize_base_url(base_url);
    let mut xml = String::with_capacity(256 + entries.len() * 160);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        let loc = if entry.url.starts_with("http") {
            Cow::Borrowed(entry.url.as_str())
        } else {
            Cow::Owned(format!("{}{}", base_url, entry.url))
        };

        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&lastmod.format("%Y-%m-%d").to_string());
            xml.push_str("</lastmod>\n");
        }
        xml.push_str("    <changefreq>");
        xml.push_str(entry.change_frequency.as_str());
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(&format_priority(entry.priority));
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Structural sanity check, not schema validation
pub fn validate_sitemap(xml: &str) -> bool {
    if !xml.contains(XML_DECLARATION) {
        return false;
    }
    if !xml.contains(&format!("<urlset xmlns=\"{}\">", SITEMAP_NS)) || !xml.contains("</urlset>") {
        return false;
    }
    if xml.contains("<url>") && !(xml.contains("<loc>") && xml.contains("</loc>")) {
        return false;
    }
    true
}

/// Write the sitemap below `output_dir`, creating parent directories.
///
/// A leading `/` on `output_path` refers to the root of the output directory.
pub fn write_sitemap(output_dir: &Path, output_path: &Path, xml: &str) -> Result<PathBuf> {
    let relative = output_path.strip_prefix("/").unwrap_or(output_path);
    let sitemap_path = output_dir.join(relative);

    if let Some(parent) = sitemap_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&sitemap_path, xml)
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    Ok(sitemap_path)
}

/// Priority with exactly one decimal, clamped to the protocol range [0.0, 1.0]
fn format_priority(priority: f64) -> String {
    let priority = if !priority.is_finite() {
        DEFAULT_PRIORITY
    } else if priority > 0.0 {
        priority.min(1.0)
    } else {
        0.0
    };
    format!("{:.1}", priority)
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(url: &str) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            lastmod: NaiveDate::from_ymd_opt(2025, 1, 1),
            priority: 0.8,
            change_frequency: ChangeFrequency::Weekly,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = generate_sitemap(&[], "https://example.com");

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 0);
        assert!(validate_sitemap(&xml));
    }

    #[test]
    fn test_sitemap_single_entry() {
        let xml = generate_sitemap(&[entry("/red-studio")], "https://jabaki.nl");

        assert!(xml.contains("<loc>https://jabaki.nl/red-studio</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(validate_sitemap(&xml));
    }

    #[test]
    fn test_trailing_slash_base_url() {
        let with_slash = generate_sitemap(&[entry("/x")], "https://example.com/");
        let without = generate_sitemap(&[entry("/x")], "https://example.com");

        assert!(with_slash.contains("<loc>https://example.com/x</loc>"));
        assert_eq!(with_slash, without);
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        let xml = generate_sitemap(&[entry("/x")], "https://example.com//");
        assert!(xml.contains("<loc>https://example.com//x</loc>"));
    }

    #[test]
    fn test_absolute_urls_are_kept() {
        let xml = generate_sitemap(&[entry("https://other.example/page")], "https://example.com");
        assert!(xml.contains("<loc>https://other.example/page</loc>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = generate_sitemap(
            &[entry("/search?q=a&b=<c>\"d'")],
            "https://example.com",
        );

        assert!(xml.contains(
            "<loc>https://example.com/search?q=a&amp;b=&lt;c&gt;&quot;d&apos;</loc>"
        ));
        let loc = xml.split("<loc>").nth(1).unwrap().split("</loc>").next().unwrap();
        for raw in ['<', '>', '"', '\''] {
            assert!(!loc.contains(raw), "raw {:?} leaked into <loc>", raw);
        }
        let without_entities = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]
            .iter()
            .fold(loc.to_string(), |acc, entity| acc.replace(entity, ""));
        assert!(!without_entities.contains('&'));
    }

    #[test]
    fn test_priority_has_one_decimal() {
        let cases = [
            (0.8, "0.8"),
            (0.85, "0.8"),
            (1.0, "1.0"),
            (0.1, "0.1"),
            (0.0, "0.0"),
            (-0.0, "0.0"),
            (-3.0, "0.0"),
            (12.5, "1.0"),
            (f64::NAN, "0.5"),
            (f64::INFINITY, "0.5"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_priority(input), expected, "priority {}", input);
        }

        for i in 0..=100 {
            let formatted = format_priority(i as f64 / 37.0);
            let bytes = formatted.as_bytes();
            assert_eq!(bytes.len(), 3, "{}", formatted);
            assert!(bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit());
        }
    }

    #[test]
    fn test_lastmod_is_optional() {
        let mut e = entry("/red-studio");
        e.lastmod = None;
        let xml = generate_sitemap(&[e], "https://example.com");
        assert!(!xml.contains("<lastmod>"));
        assert!(validate_sitemap(&xml));
    }

    #[test]
    fn test_entries_from_registry() {
        let registry = Registry::reference().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let entries = entries_from_registry(&registry, date);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].url, "/red-studio");
        assert_eq!(entries[2].priority, 0.9);

        let xml = generate_sitemap(&entries, "https://jabaki.nl");
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(xml.contains("<loc>https://jabaki.nl/red-studio</loc>"));
        assert!(xml.contains("<loc>https://jabaki.nl/green-studio</loc>"));
        assert!(xml.contains("<loc>https://jabaki.nl/garden-studio</loc>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert_eq!(xml.matches("<lastmod>2025-06-01</lastmod>").count(), 3);
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = generate_sitemap(&[entry("/")], "https://example.com");
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_validate_sitemap_rejects_broken_documents() {
        assert!(!validate_sitemap(""));
        assert!(!validate_sitemap("<urlset></urlset>"));
        assert!(!validate_sitemap(&format!(
            "{}\n<urlset xmlns=\"{}\">",
            XML_DECLARATION, SITEMAP_NS
        )));
        assert!(!validate_sitemap(&format!(
            "{}\n<urlset>\n</urlset>",
            XML_DECLARATION
        )));
        assert!(!validate_sitemap(&format!(
            "{}\n<urlset xmlns=\"{}\"><url></url></urlset>",
            XML_DECLARATION, SITEMAP_NS
        )));
    }

    #[test]
    fn test_write_sitemap() {
        let dir = TempDir::new().unwrap();
        let xml = generate_sitemap(&[entry("/red-studio")], "https://jabaki.nl");

        let path = write_sitemap(dir.path(), Path::new("/sitemap.xml"), &xml).unwrap();
        assert_eq!(path, dir.path().join("sitemap.xml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), xml);

        let nested = write_sitemap(dir.path(), Path::new("seo/sitemap.xml"), &xml).unwrap();
        assert!(nested.ends_with("seo/sitemap.xml"));
        assert!(nested.exists());
    }
}
