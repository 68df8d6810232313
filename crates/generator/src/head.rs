use crate::normalize_base_url;
use seo_kit_core::RouteEntry;

/// HTML-escape a string for text and attribute positions
///
/// Escapes: & < > " '
fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Render the document head tags a studio page must carry.
///
/// Emits the title, description, keywords and canonical link checked by the
/// snapshot validator, plus Open Graph and Twitter card tags for sharing. The
/// client app is expected to emit the same set, so a prerendered snapshot of
/// the page contains these tags verbatim.
pub fn render_head_tags(entry: &RouteEntry, base_url: &str) -> String {
    let canonical = format!("{}{}", normalize_base_url(base_url), entry.path);
    let title = html_escape(&entry.metadata.title);
    let description = html_escape(&entry.metadata.description);
    let keywords = html_escape(&entry.metadata.keywords.join(", "));
    let canonical = html_escape(&canonical);

    format!(
        r#"<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<link rel="canonical" href="{canonical}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{canonical}">
<meta property="og:type" content="website">
<meta name="twitter:card" content="summary">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
"#
    )
}
