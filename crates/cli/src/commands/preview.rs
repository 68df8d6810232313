use super::{load_config, output_dir};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Serve the build output the way production hosting does.
///
/// Prerendered routes are served from `{route}/index.html`; any other path
/// falls back to the SPA shell so client-side routing takes over.
pub async fn run(config: Option<PathBuf>, output: Option<PathBuf>, port: u16) -> Result<()> {
    let site = load_config(config)?;
    let dir = output_dir(&site, output);

    println!("🌐 Starting preview server...");
    println!("   Output: {}", dir.display());

    if !dir.join("index.html").exists() {
        anyhow::bail!(
            "index.html not found in {}\nBuild the client app first",
            dir.display()
        );
    }

    for route in &site.prerender.routes {
        let snapshot = dir.join(route.trim_start_matches('/')).join("index.html");
        let mark = if snapshot.exists() { "✓ prerendered" } else { "↩ SPA fallback" };
        println!("   {} {}", mark, route);
    }

    let app = router(&dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(dir: &Path) -> Router {
    let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
    Router::new()
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
}
