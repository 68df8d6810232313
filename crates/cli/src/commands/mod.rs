pub mod build;
pub mod check;
pub mod head;
pub mod init;
pub mod prerender;
pub mod preview;
pub mod sitemap;
pub mod validate;

use anyhow::{Context, Result};
use seo_kit_core::{SiteConfig, parse_seo_toml};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = "seo.toml";

/// Load the site config: an explicit path must exist; otherwise `./seo.toml`
/// is used when present, falling back to the built-in configuration.
pub fn load_config(path: Option<PathBuf>) -> Result<SiteConfig> {
    load_config_from(path, Path::new(DEFAULT_CONFIG))
}

fn load_config_from(path: Option<PathBuf>, default: &Path) -> Result<SiteConfig> {
    match path {
        Some(path) => parse_seo_toml(&path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None if default.exists() => parse_seo_toml(default)
            .with_context(|| format!("Failed to load {}", default.display())),
        None => {
            tracing::debug!("no seo.toml found, using built-in site config");
            Ok(SiteConfig::reference())
        }
    }
}

/// Output directory from the flag, else from the prerender settings
pub fn output_dir(config: &SiteConfig, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| config.prerender.output_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_kit_core::config::SEO_TOML_TEMPLATE;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_uses_reference() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(None, &dir.path().join("seo.toml")).unwrap();
        assert_eq!(config, SiteConfig::reference());
    }

    #[test]
    fn test_default_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seo.toml");
        fs::write(
            &path,
            SEO_TOML_TEMPLATE.replace("https://jabaki.nl", "https://staging.jabaki.nl"),
        )
        .unwrap();

        let config = load_config_from(None, &path).unwrap();
        assert_eq!(config.base_url, "https://staging.jabaki.nl");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(
            Some(dir.path().join("nope.toml")),
            &dir.path().join("seo.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_output_dir_override() {
        let config = SiteConfig::reference();
        assert_eq!(output_dir(&config, None), PathBuf::from("dist"));
        assert_eq!(
            output_dir(&config, Some(PathBuf::from("public"))),
            PathBuf::from("public")
        );
    }
}
