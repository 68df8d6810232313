use super::load_config;
use std::path::PathBuf;

pub async fn run(config: Option<PathBuf>) -> anyhow::Result<()> {
    let site = load_config(config)?;
    let registry = site.registry()?;

    println!("✓ Configuration valid");
    println!("  Base URL: {}", site.base_url);
    println!("  Studios: {}", registry.entries().len());
    for entry in registry.entries() {
        println!(
            "    {} {} (priority {}, {})",
            entry.path, entry.name, entry.seo.priority, entry.seo.change_frequency
        );
    }
    println!(
        "  Prerender: {} route(s) into {}{}",
        site.prerender.routes.len(),
        site.prerender.output_dir.display(),
        if site.prerender.enabled { "" } else { " (disabled)" }
    );
    println!("  Sitemap: {}", site.sitemap.output_path.display());

    for route in &site.prerender.routes {
        if !registry.contains_route(route) {
            println!("  ⚠ Route {} has no studio entry", route);
        }
    }

    Ok(())
}
