//! Prerendering orchestration: drive a renderer over the configured routes,
//! validate build output, decide fallbacks and report.

pub mod log;
pub mod pipeline;
pub mod renderer;
pub mod report;
pub mod service;

pub use log::BuildLog;
pub use pipeline::{PrerenderSummary, RouteOutcome, prerender_routes};
pub use renderer::{HttpRenderer, RenderError, Renderer};
pub use report::render_report;
pub use service::{BuildOutcome, FallbackDecision, PrerenderConfig, PrerenderService, ValidationOptions};
