use super::{load_config, output_dir};
use anyhow::Result;
use chrono::Utc;
use seo_kit_core::{Registry, SiteConfig};
use seo_kit_generator::{entries_from_registry, generate_sitemap, validate_sitemap, write_sitemap};
use std::path::{Path, PathBuf};

pub async fn run(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let site = load_config(config)?;
    let registry = site.registry()?;
    let output = output_dir(&site, output);

    println!("🗺  Generating sitemap...");
    let (path, count) = write_site_sitemap(&site, &registry, &output)?;
    println!("   ✓ Wrote {} ({} URLs for {})", path.display(), count, site.base_url);
    Ok(())
}

/// Generate the sitemap for every registered studio and write it below
/// `output`. Returns the written path and the number of URLs.
pub fn write_site_sitemap(
    site: &SiteConfig,
    registry: &Registry,
    output: &Path,
) -> Result<(PathBuf, usize)> {
    let lastmod = site
        .sitemap
        .include_lastmod
        .then(|| Utc::now().date_naive());
    let entries = entries_from_registry(registry, lastmod);
    let xml = generate_sitemap(&entries, &site.base_url);

    if !validate_sitemap(&xml) {
        anyhow::bail!("Generated sitemap is not well formed");
    }

    let path = write_sitemap(output, &site.sitemap.output_path, &xml)?;
    Ok((path, entries.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_every_studio() {
        let dir = TempDir::new().unwrap();
        let site = SiteConfig::reference();
        let registry = site.registry().unwrap();

        let (path, count) = write_site_sitemap(&site, &registry, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("sitemap.xml"));
        assert_eq!(count, 3);
        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("<loc>https://jabaki.nl/garden-studio</loc>"));
        assert!(xml.contains("<lastmod>"));
    }

    #[test]
    fn test_lastmod_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let mut site = SiteConfig::reference();
        site.sitemap.include_lastmod = false;
        let registry = site.registry().unwrap();

        let (path, _) = write_site_sitemap(&site, &registry, dir.path()).unwrap();
        assert!(!fs::read_to_string(path).unwrap().contains("<lastmod>"));
    }
}
