use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("renderer returned HTTP {0}")]
    Status(u16),
    #[error("renderer returned an empty document")]
    Empty,
}

/// Capability that turns a client-rendered route into an HTML snapshot.
///
/// Timeouts are the renderer's business; callers await one route at a time
/// and never retry.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, route: &str) -> Result<String, RenderError>;
}

/// Renderer backed by an HTTP prerender service.
///
/// `GET {endpoint}{route}` must answer with the fully rendered document, e.g.
/// a headless-browser proxy in front of the preview server.
pub struct HttpRenderer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRenderer {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, RenderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn route_url(&self, route: &str) -> String {
        if route.starts_with('/') {
            format!("{}{}", self.endpoint, route)
        } else {
            format!("{}/{}", self.endpoint, route)
        }
    }
}

#[async_trait]
impl Renderer for HttpRenderer {
    async fn render(&self, route: &str) -> Result<String, RenderError> {
        let url = self.route_url(route);
        tracing::debug!(%url, "rendering route");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        if html.trim().is_empty() {
            return Err(RenderError::Empty);
        }
        Ok(html)
    }
}
