use super::{load_config, output_dir};
use anyhow::{Context, Result};
use seo_kit_core::SiteConfig;
use seo_kit_prerender::{BuildOutcome, PrerenderConfig, PrerenderService, ValidationOptions};
use std::path::{Path, PathBuf};

pub async fn run(
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
    json: bool,
) -> Result<()> {
    let site = load_config(config)?;
    let output = output_dir(&site, output);

    let options = ValidationOptions {
        strict_mode: strict,
        ..ValidationOptions::default()
    };
    let outcome = check_output(&site, &output, &options)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
        println!("{}", rendered);
    } else {
        print_outcome(&outcome);
    }

    if !outcome.validation.is_valid() {
        anyhow::bail!("Build validation failed");
    }
    Ok(())
}

/// Validate the build output against the configured routes
pub fn check_output(
    site: &SiteConfig,
    output: &Path,
    options: &ValidationOptions,
) -> Result<BuildOutcome> {
    let service = PrerenderService::new(
        PrerenderConfig {
            routes: site.prerender.routes.clone(),
            output_dir: output.to_path_buf(),
        },
        site.registry()?,
    );
    Ok(service.validate_build_process(output, options))
}

pub fn print_outcome(outcome: &BuildOutcome) {
    println!("{}", outcome.report);

    if !outcome.fallbacks.is_empty() {
        println!("\n=== Fallbacks ===");
        for fallback in &outcome.fallbacks {
            let mark = if fallback.succeeded { "✓" } else { "✗" };
            println!("{} {}", mark, fallback.message);
        }
    }

    println!("\n=== Recommendations ===");
    for recommendation in &outcome.recommendations {
        println!("  - {}", recommendation);
    }
}
