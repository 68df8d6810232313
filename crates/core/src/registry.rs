use crate::error::{Error, Result};
use crate::types::{PageMetadata, RouteEntry, SeoSettings, SiteConfig, StudioId};
use std::collections::HashSet;

/// Immutable lookup table of registered studio routes
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    entries: Vec<RouteEntry>,
}

impl Registry {
    /// Build a registry, asserting entry invariants.
    ///
    /// Paths must start with `/` and be unique; titles and descriptions must
    /// be non-empty and unique across entries; keywords, features and content
    /// markers must be present; priority must lie in (0, 1].
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut paths = HashSet::new();
        let mut titles = HashSet::new();
        let mut descriptions = HashSet::new();

        for entry in &entries {
            let id = entry.id;

            if !ids.insert(id) {
                return Err(invalid(format!("Duplicate studio id '{}'", id)));
            }
            if !entry.path.starts_with('/') || entry.slug().is_empty() {
                return Err(invalid(format!(
                    "Route path for '{}' must start with '/' and name a page: '{}'",
                    id, entry.path
                )));
            }
            if !paths.insert(entry.path.as_str()) {
                return Err(invalid(format!("Duplicate route path '{}'", entry.path)));
            }

            let metadata = &entry.metadata;
            if metadata.title.trim().is_empty() {
                return Err(invalid(format!("Empty title for '{}'", id)));
            }
            if metadata.description.trim().is_empty() {
                return Err(invalid(format!("Empty description for '{}'", id)));
            }
            if !titles.insert(metadata.title.as_str()) {
                return Err(invalid(format!("Duplicate title '{}'", metadata.title)));
            }
            if !descriptions.insert(metadata.description.as_str()) {
                return Err(invalid(format!("Duplicate description for '{}'", id)));
            }
            if metadata.keywords.is_empty() || metadata.keywords.iter().any(|k| k.is_empty()) {
                return Err(invalid(format!("Keywords for '{}' must be non-empty", id)));
            }
            if metadata.features.is_empty() || metadata.features.iter().any(|f| f.is_empty()) {
                return Err(invalid(format!("Features for '{}' must be non-empty", id)));
            }

            let priority = entry.seo.priority;
            if !(priority > 0.0 && priority <= 1.0) {
                return Err(invalid(format!(
                    "Priority for '{}' must be in (0, 1], got {}",
                    id, priority
                )));
            }

            if entry.markers.name.is_empty() || entry.markers.feature.is_empty() {
                return Err(invalid(format!("Content markers for '{}' must be set", id)));
            }
        }

        Ok(Self { entries })
    }

    /// Registry of the built-in reference configuration
    pub fn reference() -> Result<Self> {
        Self::new(SiteConfig::reference().studios)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn get_entry(&self, id: StudioId) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Lookup by id string, exact match only
    pub fn find(&self, id: &str) -> Option<&RouteEntry> {
        StudioId::parse(id).and_then(|id| self.get_entry(id))
    }

    pub fn get_metadata(&self, id: StudioId) -> Option<&PageMetadata> {
        self.get_entry(id).map(|e| &e.metadata)
    }

    pub fn get_seo_settings(&self, id: StudioId) -> Option<&SeoSettings> {
        self.get_entry(id).map(|e| &e.seo)
    }

    /// Route paths in registration order
    pub fn all_routes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Exact path membership
    pub fn contains_route(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// Resolve a studio id, a route path, or any route string naming a studio
    /// slug (e.g. `red-studio`, `/red-studio/`) to its entry.
    pub fn entry_for_route(&self, route: &str) -> Option<&RouteEntry> {
        if route.is_empty() {
            return None;
        }

        self.find(route)
            .or_else(|| self.entries.iter().find(|e| e.path == route))
            .or_else(|| self.entries.iter().find(|e| route.contains(e.slug())))
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidData(msg)
}
