use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Commented seo.toml matching the built-in reference configuration
pub const SEO_TOML_TEMPLATE: &str = r#"# SEO configuration for the studio site
#
# Routes listed under [prerender] are rendered to <output_dir>/<route>/index.html
# and validated against the [[studio]] content markers.

[site]
base_url = "https://jabaki.nl"

[sitemap]
# Relative to the build output directory
output_path = "/sitemap.xml"
include_lastmod = true

[prerender]
enabled = true
output_dir = "dist"
# routes = ["/red-studio", "/green-studio", "/garden-studio"]  # defaults to all studio routes

[[studio]]
id = "red"
name = "Red Studio"
route = "/red-studio"
title = "Red Studio Hoofddorp | Jabaki"
description = "Stylish Red Studio in Hoofddorp with rooftop terrace. Modern accommodation near Schiphol Airport. Perfect for business travelers and tourists visiting Amsterdam."
keywords = ["red studio", "hoofddorp", "schiphol", "accommodation", "rooftop terrace", "modern", "business travel"]
features = [
    "Private rooftop terrace",
    "Self service check-in",
    "Modern furnishing and amenities",
    "Close to Schiphol Airport",
    "Easy access to Amsterdam",
    "Perfect for business travel",
]
priority = 0.8
changefreq = "weekly"
name_marker = "Red Studio Hoofddorp"
feature_marker = "rooftop terrace"

[[studio]]
id = "green"
name = "Green Studio"
route = "/green-studio"
title = "Green Studio Hoofddorp | Jabaki"
description = "Modern Green Studio in Hoofddorp with terrace. Comfortable accommodation near Schiphol Airport and Amsterdam. Ideal for short and long stays."
keywords = ["green studio", "hoofddorp", "schiphol", "accommodation", "terrace", "modern", "comfortable"]
features = [
    "Terrace",
    "Self service check-in",
    "Modern and comfortable furnishing",
    "Near Schiphol Airport",
    "Quick access to Amsterdam",
    "Suitable for extended stays",
]
priority = 0.8
changefreq = "weekly"
name_marker = "Green Studio Hoofddorp"
feature_marker = "scenic views"

[[studio]]
id = "garden"
name = "Garden Studio"
route = "/garden-studio"
title = "Garden Studio Hoofddorp | Privé Terras nabij Schiphol - Jabaki"
description = "Cozy Garden Studio with beautiful private garden terrace near Schiphol Airport. Tranquil outdoor space perfect for relaxation. Garden, tuin, outdoor, privacy, terrace."
keywords = ["garden studio", "hoofddorp", "schiphol", "privé terras", "garden", "tuin", "outdoor", "tranquil", "privacy", "terrace"]
features = [
    "Private garden terrace (privé terras)",
    "Outdoor seating and dining area",
    "Tranquil garden setting (tuin)",
    "Privacy and peaceful atmosphere",
    "Perfect for outdoor relaxation",
    "Close to Schiphol Airport",
]
priority = 0.9
changefreq = "weekly"
name_marker = "Garden Studio Hoofddorp"
feature_marker = "privé terras"
"#;

/// Raw TOML configuration structure
/// This matches the seo.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    #[serde(default)]
    studio: Vec<RawStudio>,
    #[serde(default)]
    sitemap: Option<RawSitemap>,
    #[serde(default)]
    prerender: Option<RawPrerender>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RawStudio {
    id: StudioId,
    name: String,
    route: String,
    title: String,
    description: String,
    keywords: Vec<String>,
    features: Vec<String>,
    priority: f64,
    changefreq: ChangeFrequency,
    name_marker: String,
    feature_marker: String,
}

#[derive(Debug, Deserialize)]
struct RawSitemap {
    output_path: Option<String>,
    include_lastmod: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawPrerender {
    enabled: Option<bool>,
    output_dir: Option<String>,
    routes: Option<Vec<String>>,
}

/// Parse seo.toml from a file path
pub fn parse_seo_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_seo_toml_str(&content)
}

/// Parse seo.toml from a string (useful for testing)
pub fn parse_seo_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let base_url = raw.site.base_url.trim().to_string();
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        return Err(Error::ConfigParse(format!(
            "site.base_url must be an absolute http(s) URL: '{}'",
            base_url
        )));
    }

    if raw.studio.is_empty() {
        return Err(Error::ConfigParse(
            "At least one [[studio]] entry is required".to_string(),
        ));
    }

    let studios: Vec<RouteEntry> = raw
        .studio
        .into_iter()
        .map(|s| RouteEntry {
            id: s.id,
            name: s.name,
            path: s.route,
            metadata: PageMetadata {
                title: s.title,
                description: s.description,
                keywords: s.keywords,
                features: s.features,
            },
            seo: SeoSettings {
                priority: s.priority,
                change_frequency: s.changefreq,
            },
            markers: ContentMarkers {
                name: s.name_marker,
                feature: s.feature_marker,
            },
        })
        .collect();

    let sitemap = match raw.sitemap {
        Some(raw_sitemap) => {
            let defaults = SitemapSettings::default();
            let output_path = match raw_sitemap.output_path {
                Some(p) => {
                    // A leading slash means "at the root of the output directory"
                    validate_path(p.trim_start_matches('/'), "sitemap.output_path")?;
                    PathBuf::from(p)
                }
                None => defaults.output_path,
            };
            SitemapSettings {
                output_path,
                include_lastmod: raw_sitemap
                    .include_lastmod
                    .unwrap_or(defaults.include_lastmod),
            }
        }
        None => SitemapSettings::default(),
    };

    let studio_routes: Vec<String> = studios.iter().map(|s| s.path.clone()).collect();
    let prerender = match raw.prerender {
        Some(p) => PrerenderSettings {
            enabled: p.enabled.unwrap_or(true),
            output_dir: match p.output_dir {
                Some(dir) => validate_path(&dir, "prerender.output_dir")?,
                None => PathBuf::from("dist"),
            },
            routes: p.routes.unwrap_or(studio_routes),
        },
        None => PrerenderSettings {
            enabled: true,
            output_dir: PathBuf::from("dist"),
            routes: studio_routes,
        },
    };

    Ok(SiteConfig {
        base_url,
        studios,
        sitemap,
        prerender,
    })
}

impl SiteConfig {
    /// Build the route registry, asserting entry invariants
    pub fn registry(&self) -> Result<Registry> {
        Registry::new(self.studios.clone())
    }
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths, parent directory references (`..`) and empty
/// paths, so a config file cannot direct output outside the project.
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    if path.components().any(|c| c == Component::ParentDir) {
        return Err(Error::ConfigParse(format!(
            "Parent directory references (..) not allowed in '{}': '{}'",
            field_name, path_str
        )));
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[site]
base_url = "https://example.com"

[[studio]]
id = "red"
name = "Red Studio"
route = "/red-studio"
title = "Red"
description = "A red studio"
keywords = ["red"]
features = ["Rooftop terrace"]
priority = 0.5
changefreq = "monthly"
name_marker = "Red Studio"
feature_marker = "rooftop terrace"
"#;

    #[test]
    fn test_template_matches_reference() {
        let config = parse_seo_toml_str(SEO_TOML_TEMPLATE).unwrap();
        assert_eq!(config, SiteConfig::reference());
    }

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let config = parse_seo_toml_str(MINIMAL).unwrap();
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.studios.len(), 1);
        assert_eq!(config.studios[0].seo.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(config.sitemap, SitemapSettings::default());
        assert_eq!(config.prerender.output_dir, PathBuf::from("dist"));
        assert_eq!(config.prerender.routes, vec!["/red-studio"]);
        assert!(config.registry().is_ok());
    }

    #[test]
    fn test_explicit_routes_are_kept_verbatim() {
        let toml = format!(
            "{}\n[prerender]\noutput_dir = \"build\"\nroutes = [\"/red-studio\", \"/about\", \"/about\"]\n",
            MINIMAL
        );
        let config = parse_seo_toml_str(&toml).unwrap();
        assert_eq!(config.prerender.output_dir, PathBuf::from("build"));
        assert_eq!(config.prerender.routes, vec!["/red-studio", "/about", "/about"]);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let toml = MINIMAL.replace("https://example.com", "example.com");
        let err = parse_seo_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_rejects_unknown_studio_id() {
        let toml = MINIMAL.replace("id = \"red\"", "id = \"blue\"");
        assert!(parse_seo_toml_str(&toml).is_err());
    }

    #[test]
    fn test_rejects_unknown_changefreq() {
        let toml = MINIMAL.replace("\"monthly\"", "\"hourly\"");
        assert!(parse_seo_toml_str(&toml).is_err());
    }

    #[test]
    fn test_rejects_missing_studios() {
        let toml = "[site]\nbase_url = \"https://example.com\"\n";
        let err = parse_seo_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("[[studio]]"));
    }

    #[test]
    fn test_rejects_traversal_in_output_dir() {
        let toml = format!("{}\n[prerender]\noutput_dir = \"../outside\"\n", MINIMAL);
        let err = parse_seo_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("Parent directory references"));
    }

    #[test]
    fn test_rejects_traversal_in_sitemap_path() {
        let toml = format!(
            "{}\n[sitemap]\noutput_path = \"/../../sitemap.xml\"\n",
            MINIMAL
        );
        let err = parse_seo_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("sitemap.output_path"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("dist", "dir").is_ok());
        assert!(validate_path("build/out", "dir").is_ok());
        assert!(validate_path("", "dir").is_err());
        assert!(validate_path("   ", "dir").is_err());
        assert!(validate_path("/etc", "dir").is_err());
        assert!(validate_path("a/../../b", "dir").is_err());
    }

    #[test]
    fn test_parse_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seo.toml");
        fs::write(&path, MINIMAL).unwrap();

        let config = parse_seo_toml(&path).unwrap();
        assert_eq!(config.studios[0].markers.feature, "rooftop terrace");

        let missing = dir.path().join("missing.toml");
        assert!(matches!(parse_seo_toml(&missing), Err(Error::IoError(_))));
    }
}
