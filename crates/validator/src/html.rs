//! Content checks for a rendered HTML snapshot.
//!
//! The marker strings below are the contract with the renderer: a snapshot is
//! only usable for indexing when it carries a doctype, an `<html` root, the
//! title / description / canonical head elements, and, for studio pages, both
//! the studio-name phrase and the feature phrase of that studio.

use seo_kit_core::Registry;
use thiserror::Error;

const HTML_ROOT: &str = "<html";
const DOCTYPE: &str = "<!doctype html";
const TITLE: &str = "<title>";
const META_DESCRIPTION: &str = "meta name=\"description\"";
const CANONICAL: &str = "rel=\"canonical\"";

/// First check a snapshot failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlIssue {
    #[error("missing doctype declaration")]
    MissingDoctype,
    #[error("missing <html> root element")]
    MissingHtmlRoot,
    #[error("missing <title> element")]
    MissingTitle,
    #[error("missing meta description")]
    MissingDescription,
    #[error("missing canonical link")]
    MissingCanonical,
    #[error("missing studio name \"{phrase}\" for {route}")]
    MissingStudioName { route: String, phrase: String },
    #[error("missing feature phrase \"{phrase}\" for {route}")]
    MissingFeature { route: String, phrase: String },
}

/// Run the snapshot checks in order, stopping at the first failure.
///
/// `route` may be a studio id (`red`), a path (`/red-studio`) or any route
/// string naming a studio slug. Routes that do not resolve to a registered
/// studio skip the studio content check.
pub fn check_html(html: &str, route: &str, registry: &Registry) -> Result<(), HtmlIssue> {
    if !html.to_ascii_lowercase().contains(DOCTYPE) {
        return Err(HtmlIssue::MissingDoctype);
    }
    if !html.contains(HTML_ROOT) {
        return Err(HtmlIssue::MissingHtmlRoot);
    }

    if !html.contains(TITLE) {
        return Err(HtmlIssue::MissingTitle);
    }
    if !html.contains(META_DESCRIPTION) {
        return Err(HtmlIssue::MissingDescription);
    }
    if !html.contains(CANONICAL) {
        return Err(HtmlIssue::MissingCanonical);
    }

    if let Some(entry) = registry.entry_for_route(route) {
        if !html.contains(&entry.markers.name) {
            return Err(HtmlIssue::MissingStudioName {
                route: route.to_string(),
                phrase: entry.markers.name.clone(),
            });
        }
        if !html.contains(&entry.markers.feature) {
            return Err(HtmlIssue::MissingFeature {
                route: route.to_string(),
                phrase: entry.markers.feature.clone(),
            });
        }
    }

    Ok(())
}

/// True when the snapshot passes every applicable check
pub fn validate_html(html: &str, route: &str, registry: &Registry) -> bool {
    check_html(html, route, registry).is_ok()
}
