use super::check::{check_output, print_outcome};
use super::prerender::prerender_site;
use super::sitemap::write_site_sitemap;
use super::{load_config, output_dir};
use anyhow::Result;
use seo_kit_prerender::ValidationOptions;
use std::path::PathBuf;

/// Post-build SEO pipeline: prerender, sitemap, then output check.
///
/// Only the final check decides the exit status. A sitemap failure is
/// reported as a warning.
pub async fn run(
    config: Option<PathBuf>,
    renderer_url: String,
    timeout: u64,
    output: Option<PathBuf>,
) -> Result<()> {
    let site = load_config(config)?;
    let registry = site.registry()?;
    let output = output_dir(&site, output);

    if !output.is_dir() {
        anyhow::bail!(
            "Build output not found: {}\nBuild the client app first",
            output.display()
        );
    }

    if site.prerender.enabled {
        prerender_site(&site, &renderer_url, timeout, &output).await?;
    } else {
        println!("Prerendering disabled, skipping");
    }

    println!("\n🗺  Generating sitemap...");
    match write_site_sitemap(&site, &registry, &output) {
        Ok((path, count)) => println!(
            "   ✓ Wrote {} ({} URLs for {})",
            path.display(),
            count,
            site.base_url
        ),
        Err(e) => {
            tracing::warn!("sitemap generation failed: {:#}", e);
            println!("   ⚠ Sitemap not written: {:#}", e);
        }
    }

    println!("\n🔍 Checking build output...\n");
    let outcome = check_output(&site, &output, &ValidationOptions::default())?;
    print_outcome(&outcome);

    if !outcome.validation.is_valid() {
        anyhow::bail!("Build validation failed");
    }

    println!("\n✅ Build ready: {}", output.display());
    Ok(())
}
