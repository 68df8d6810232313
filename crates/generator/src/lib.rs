//! Static SEO artifacts: XML sitemap and document head tags.

pub mod head;
pub mod sitemap;

pub use head::render_head_tags;
pub use sitemap::{
    SITEMAP_NS, SitemapEntry, entries_from_registry, generate_sitemap, validate_sitemap,
    write_sitemap,
};

/// Strip exactly one trailing slash from a base URL
pub(crate) fn normalize_base_url(base_url: &str) -> &str {
    base_url.strip_suffix('/').unwrap_or(base_url)
}
