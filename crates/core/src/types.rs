use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifier of a registered studio page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudioId {
    Red,
    Green,
    Garden,
}

impl StudioId {
    pub const ALL: [StudioId; 3] = [StudioId::Red, StudioId::Green, StudioId::Garden];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudioId::Red => "red",
            StudioId::Green => "green",
            StudioId::Garden => "garden",
        }
    }

    /// Exact, case-sensitive lookup. Unknown ids are `None`.
    pub fn parse(s: &str) -> Option<StudioId> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl fmt::Display for StudioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap change frequency hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page metadata rendered into the document head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub features: Vec<String>,
}

/// Sitemap hints for a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeoSettings {
    pub priority: f64,
    #[serde(rename = "changefreq")]
    pub change_frequency: ChangeFrequency,
}

/// Phrases a prerendered snapshot of a studio page must contain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMarkers {
    /// Studio-name phrase, e.g. "Red Studio Hoofddorp"
    pub name: String,
    /// Signature-feature phrase, e.g. "rooftop terrace"
    pub feature: String,
}

/// One registered page route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub id: StudioId,
    pub name: String,
    pub path: String,
    pub metadata: PageMetadata,
    pub seo: SeoSettings,
    pub markers: ContentMarkers,
}

impl RouteEntry {
    /// Path without the leading slash, e.g. "red-studio"
    pub fn slug(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

/// Sitemap output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapSettings {
    /// Path of the sitemap file relative to the output directory
    pub output_path: PathBuf,
    pub include_lastmod: bool,
}

impl Default for SitemapSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("/sitemap.xml"),
            include_lastmod: true,
        }
    }
}

/// Prerender step settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrerenderSettings {
    pub enabled: bool,
    pub output_dir: PathBuf,
    pub routes: Vec<String>,
}

/// Complete site SEO configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub studios: Vec<RouteEntry>,
    pub sitemap: SitemapSettings,
    pub prerender: PrerenderSettings,
}

impl SiteConfig {
    /// Built-in configuration of the live site, used when no seo.toml is present
    pub fn reference() -> Self {
        let studios = reference_studios();
        let routes = studios.iter().map(|s| s.path.clone()).collect();

        Self {
            base_url: "https://jabaki.nl".to_string(),
            studios,
            sitemap: SitemapSettings::default(),
            prerender: PrerenderSettings {
                enabled: true,
                output_dir: PathBuf::from("dist"),
                routes,
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn reference_studios() -> Vec<RouteEntry> {
    vec![
        RouteEntry {
            id: StudioId::Red,
            name: "Red Studio".to_string(),
            path: "/red-studio".to_string(),
            metadata: PageMetadata {
                title: "Red Studio Hoofddorp | Jabaki".to_string(),
                description: "Stylish Red Studio in Hoofddorp with rooftop terrace. Modern accommodation near Schiphol Airport. Perfect for business travelers and tourists visiting Amsterdam.".to_string(),
                keywords: strings(&[
                    "red studio",
                    "hoofddorp",
                    "schiphol",
                    "accommodation",
                    "rooftop terrace",
                    "modern",
                    "business travel",
                ]),
                features: strings(&[
                    "Private rooftop terrace",
                    "Self service check-in",
                    "Modern furnishing and amenities",
                    "Close to Schiphol Airport",
                    "Easy access to Amsterdam",
                    "Perfect for business travel",
                ]),
            },
            seo: SeoSettings {
                priority: 0.8,
                change_frequency: ChangeFrequency::Weekly,
            },
            markers: ContentMarkers {
                name: "Red Studio Hoofddorp".to_string(),
                feature: "rooftop terrace".to_string(),
            },
        },
        RouteEntry {
            id: StudioId::Green,
            name: "Green Studio".to_string(),
            path: "/green-studio".to_string(),
            metadata: PageMetadata {
                title: "Green Studio Hoofddorp | Jabaki".to_string(),
                description: "Modern Green Studio in Hoofddorp with terrace. Comfortable accommodation near Schiphol Airport and Amsterdam. Ideal for short and long stays.".to_string(),
                keywords: strings(&[
                    "green studio",
                    "hoofddorp",
                    "schiphol",
                    "accommodation",
                    "terrace",
                    "modern",
                    "comfortable",
                ]),
                features: strings(&[
                    "Terrace",
                    "Self service check-in",
                    "Modern and comfortable furnishing",
                    "Near Schiphol Airport",
                    "Quick access to Amsterdam",
                    "Suitable for extended stays",
                ]),
            },
            seo: SeoSettings {
                priority: 0.8,
                change_frequency: ChangeFrequency::Weekly,
            },
            markers: ContentMarkers {
                name: "Green Studio Hoofddorp".to_string(),
                feature: "scenic views".to_string(),
            },
        },
        RouteEntry {
            id: StudioId::Garden,
            name: "Garden Studio".to_string(),
            path: "/garden-studio".to_string(),
            metadata: PageMetadata {
                title: "Garden Studio Hoofddorp | Privé Terras nabij Schiphol - Jabaki".to_string(),
                description: "Cozy Garden Studio with beautiful private garden terrace near Schiphol Airport. Tranquil outdoor space perfect for relaxation. Garden, tuin, outdoor, privacy, terrace.".to_string(),
                keywords: strings(&[
                    "garden studio",
                    "hoofddorp",
                    "schiphol",
                    "privé terras",
                    "garden",
                    "tuin",
                    "outdoor",
                    "tranquil",
                    "privacy",
                    "terrace",
                ]),
                features: strings(&[
                    "Private garden terrace (privé terras)",
                    "Outdoor seating and dining area",
                    "Tranquil garden setting (tuin)",
                    "Privacy and peaceful atmosphere",
                    "Perfect for outdoor relaxation",
                    "Close to Schiphol Airport",
                ]),
            },
            // Higher priority for the unique garden feature
            seo: SeoSettings {
                priority: 0.9,
                change_frequency: ChangeFrequency::Weekly,
            },
            markers: ContentMarkers {
                name: "Garden Studio Hoofddorp".to_string(),
                feature: "privé terras".to_string(),
            },
        },
    ]
}
