use crate::log::BuildLog;
use crate::renderer::Renderer;
use crate::service::{FallbackDecision, PrerenderService};
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use seo_kit_validator::{check_html, expected_file_path};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());

/// What happened to one route during prerendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    pub route: String,
    /// Snapshot written to disk
    pub written: Option<PathBuf>,
    /// Why the route could not be prerendered
    pub failure: Option<String>,
    pub fallback: Option<FallbackDecision>,
}

#[derive(Debug, Clone, Default)]
pub struct PrerenderSummary {
    pub outcomes: Vec<RouteOutcome>,
}

impl PrerenderSummary {
    pub fn rendered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.written.is_some()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.failure.is_some()).count()
    }

    /// Failed routes with no runtime fallback
    pub fn unrecoverable(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.fallback.as_ref().is_some_and(|f| !f.succeeded))
            .map(|o| o.route.as_str())
            .collect()
    }
}

/// Render every configured route, validate each snapshot and write it to
/// `{output_dir}/{route}/index.html`.
///
/// Routes are processed one at a time. A failing route is never retried: the
/// fallback policy is consulted once and the run moves on.
pub async fn prerender_routes<R: Renderer + ?Sized>(
    service: &PrerenderService,
    renderer: &R,
    output_dir: &Path,
    log: &mut BuildLog,
) -> PrerenderSummary {
    let mut summary = PrerenderSummary::default();

    for route in &service.config().routes {
        let attempt = render_route(service, renderer, output_dir, route).await;

        let outcome = match attempt {
            Ok(path) => {
                tracing::info!(route = %route, path = %path.display(), "prerendered");
                RouteOutcome {
                    route: route.clone(),
                    written: Some(path),
                    failure: None,
                    fallback: None,
                }
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                log.error(format!("{}: {}", route, reason));
                let fallback = service.handle_prerendering_failure(route, log);
                RouteOutcome {
                    route: route.clone(),
                    written: None,
                    failure: Some(reason),
                    fallback: Some(fallback),
                }
            }
        };
        summary.outcomes.push(outcome);
    }

    summary
}

async fn render_route<R: Renderer + ?Sized>(
    service: &PrerenderService,
    renderer: &R,
    output_dir: &Path,
    route: &str,
) -> Result<PathBuf> {
    if route.trim_start_matches('/').trim().is_empty() || route.split('/').any(|s| s == "..") {
        anyhow::bail!("Invalid route configuration: '{}'", route);
    }

    let html = renderer
        .render(route)
        .await
        .with_context(|| format!("Failed to render {}", route))?;
    let html = strip_dev_scripts(&html);

    check_html(&html, route, service.registry())
        .with_context(|| format!("Snapshot for {} failed validation", route))?;

    let path = PathBuf::from(expected_file_path(&output_dir.to_string_lossy(), route));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Drop dev-server and hot-reload scripts from a snapshot, keeping the rest
pub fn strip_dev_scripts(html: &str) -> String {
    SCRIPT_BLOCK
        .replace_all(html, |caps: &Captures| {
            let script = &caps[0];
            if script.contains("vite") || script.contains("hmr") {
                String::new()
            } else {
                script.to_string()
            }
        })
        .into_owned()
}
