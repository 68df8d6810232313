use super::{load_config, output_dir};
use anyhow::Result;
use seo_kit_core::SiteConfig;
use seo_kit_prerender::{
    BuildLog, HttpRenderer, PrerenderConfig, PrerenderService, PrerenderSummary, prerender_routes,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub async fn run(
    config: Option<PathBuf>,
    renderer_url: String,
    timeout: u64,
    output: Option<PathBuf>,
) -> Result<()> {
    let site = load_config(config)?;
    let output = output_dir(&site, output);

    if !site.prerender.enabled {
        println!("Prerendering is disabled in the configuration, nothing to do");
        return Ok(());
    }

    prerender_site(&site, &renderer_url, timeout, &output).await?;
    Ok(())
}

/// Prerender every configured route into `output` and print the outcome.
///
/// Failed routes never abort the run; they are reported with the fallback
/// that applies to them.
pub async fn prerender_site(
    site: &SiteConfig,
    renderer_url: &str,
    timeout: u64,
    output: &Path,
) -> Result<PrerenderSummary> {
    let service = PrerenderService::new(
        PrerenderConfig {
            routes: site.prerender.routes.clone(),
            output_dir: output.to_path_buf(),
        },
        site.registry()?,
    );
    let renderer = HttpRenderer::new(renderer_url, Duration::from_secs(timeout))?;

    println!("🔨 Prerendering {} route(s)...", site.prerender.routes.len());
    println!("   Renderer: {}", renderer_url);
    println!("   Output: {}", output.display());

    let mut log = BuildLog::new(true);
    let summary = prerender_routes(&service, &renderer, output, &mut log).await;

    for outcome in &summary.outcomes {
        match (&outcome.written, &outcome.fallback) {
            (Some(path), _) => println!("   ✓ {} → {}", outcome.route, path.display()),
            (None, Some(fallback)) if fallback.succeeded => {
                println!("   ⚠ {}: {}", outcome.route, fallback.message)
            }
            (None, Some(fallback)) => println!("   ✗ {}: {}", outcome.route, fallback.message),
            (None, None) => {}
        }
    }

    println!(
        "\n   {} rendered, {} failed",
        summary.rendered(),
        summary.failed()
    );

    Ok(summary)
}
