use super::load_config;
use anyhow::Context;
use seo_kit_core::StudioId;
use seo_kit_generator::render_head_tags;
use std::path::PathBuf;

/// Print the head tags the client app sets for one studio page
pub async fn run(config: Option<PathBuf>, studio: String) -> anyhow::Result<()> {
    let site = load_config(config)?;
    let registry = site.registry()?;

    let id = StudioId::parse(&studio)
        .with_context(|| format!("Unknown studio '{}' (expected red, green or garden)", studio))?;
    let entry = registry
        .get_entry(id)
        .with_context(|| format!("Studio '{}' is not configured", id))?;

    println!("{}", render_head_tags(entry, &site.base_url));
    Ok(())
}
