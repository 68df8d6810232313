use anyhow::{Context, Result};
use seo_kit_core::config::SEO_TOML_TEMPLATE;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a commented seo.toml describing the current site.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub async fn run(path: PathBuf, force: bool) -> Result<()> {
    write_template(&path, force)?;

    println!("✓ Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} for your studios", path.display());
    println!("  2. Run 'seo-kit validate' to check it");
    Ok(())
}

fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists\nUse --force to overwrite it",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, SEO_TOML_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_kit_core::{SiteConfig, parse_seo_toml};
    use tempfile::TempDir;

    #[test]
    fn test_template_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site/seo.toml");

        write_template(&path, false).unwrap();
        assert_eq!(parse_seo_toml(&path).unwrap(), SiteConfig::reference());
    }

    #[test]
    fn test_existing_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seo.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(write_template(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        write_template(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), SEO_TOML_TEMPLATE);
    }
}
