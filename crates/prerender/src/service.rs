use crate::log::BuildLog;
use crate::report::render_report;
use chrono::Utc;
use seo_kit_core::{PrerenderSettings, Registry};
use seo_kit_validator::{
    ValidationResult, check_html, expected_file_path, find_prerendered_pages, inspect_spa_shell,
};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Routes to prerender and where snapshots land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerenderConfig {
    pub routes: Vec<String>,
    pub output_dir: PathBuf,
}

impl From<&PrerenderSettings> for PrerenderConfig {
    fn from(settings: &PrerenderSettings) -> Self {
        Self {
            routes: settings.routes.clone(),
            output_dir: settings.output_dir.clone(),
        }
    }
}

/// Knobs for output validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// When false, file checks are skipped and only configuration is checked
    pub filesystem_available: bool,
    /// Escalates environment limitations from warnings to errors
    pub strict_mode: bool,
    /// Run the snapshot content checks on every file found
    pub validate_content: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            filesystem_available: true,
            strict_mode: false,
            validate_content: true,
        }
    }
}

/// Outcome of handling one route's prerendering failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackDecision {
    pub succeeded: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_route: Option<String>,
}

/// Everything one `validate_build_process` run produced
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub validation: ValidationResult,
    pub fallbacks: Vec<FallbackDecision>,
    pub report: String,
    pub recommendations: Vec<String>,
    pub log: BuildLog,
}

/// Validates prerender output against the registry and decides fallbacks.
///
/// None of the operations fail on malformed configuration: problems are
/// described in the returned values instead.
#[derive(Debug, Clone)]
pub struct PrerenderService {
    config: PrerenderConfig,
    registry: Registry,
}

impl PrerenderService {
    pub fn new(config: PrerenderConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &PrerenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Check that every configured route has a usable snapshot at
    /// `{output_path}/{route}/index.html`, next to the SPA shell.
    pub fn validate_output(
        &self,
        output_path: &Path,
        options: &ValidationOptions,
        log: &mut BuildLog,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        let routes = self.check_route_config(&mut result);

        if !options.filesystem_available {
            if options.strict_mode {
                result.error("File system validation not available in this environment");
            } else {
                result.warning("File system validation skipped: file system not available");
            }
            return result;
        }

        if !output_path.is_dir() {
            let msg = format!("Output directory does not exist: {}", output_path.display());
            log.error(&msg);
            result.error(msg);
            return result;
        }

        let output_str = output_path.to_string_lossy();
        for route in &routes {
            let expected = expected_file_path(&output_str, route);
            match fs::read_to_string(&expected) {
                Ok(html) => {
                    if !options.validate_content {
                        result.valid_files.push(expected);
                        continue;
                    }
                    match check_html(&html, route, &self.registry) {
                        Ok(()) => result.valid_files.push(expected),
                        Err(issue) => {
                            result.error(format!("Invalid HTML content in {}: {}", expected, issue))
                        }
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // Registered routes are still served by client-side routing
                    if self.registry.contains_route(route) && !options.strict_mode {
                        result.warning(format!(
                            "No prerendered file for route {} (will fall back to SPA)",
                            route
                        ));
                    } else {
                        result.error(format!(
                            "No prerendered file for route {} and no SPA fallback",
                            route
                        ));
                    }
                    result.missing_files.push(expected);
                }
                Err(e) => {
                    let msg = format!("Failed to read {}: {}", expected, e);
                    log.error(&msg);
                    result.error(msg);
                }
            }
        }

        self.check_spa_shell(output_path, options, &mut result, log);

        let configured: HashSet<&str> = routes.iter().map(String::as_str).collect();
        for page in find_prerendered_pages(output_path) {
            if !configured.contains(page.as_str()) {
                result.warning(format!(
                    "Prerendered page {} is not in the route configuration",
                    page
                ));
            }
        }

        result
    }

    /// Configuration checks that need no file system. Returns the routes
    /// worth looking for on disk, without duplicates.
    fn check_route_config(&self, result: &mut ValidationResult) -> Vec<String> {
        let mut routes = Vec::new();
        let mut seen = HashSet::new();
        let mut has_duplicates = false;

        if self.config.routes.is_empty() {
            result.error("No routes configured for prerendering");
        }

        for route in &self.config.routes {
            if !seen.insert(route.as_str()) {
                has_duplicates = true;
                continue;
            }

            let route_path = route.strip_prefix('/').unwrap_or(route);
            if route.trim().is_empty() || route_path.is_empty() {
                result.error(format!("Invalid route configuration: '{}'", route));
                continue;
            }

            if !self.registry.contains_route(route) {
                result.warning(format!(
                    "Route {} doesn't match expected studio pattern",
                    route
                ));
            }
            routes.push(route.clone());
        }

        if has_duplicates {
            result.warning("Duplicate routes detected in configuration");
        }

        routes
    }

    fn check_spa_shell(
        &self,
        output_path: &Path,
        options: &ValidationOptions,
        result: &mut ValidationResult,
        log: &mut BuildLog,
    ) {
        let index = output_path.join("index.html").to_string_lossy().into_owned();

        match inspect_spa_shell(output_path) {
            Ok(shell) => {
                if shell.index_exists {
                    result.valid_files.push(index);
                    if options.validate_content && !shell.has_root_element {
                        result.warning(
                            "Main index.html may not be properly configured for client rendering",
                        );
                    }
                } else {
                    result.error("Missing SPA entry point index.html");
                    result.missing_files.push(index);
                }
                if !shell.assets_exists {
                    result.warning("No assets directory found in build output");
                }
            }
            Err(e) => {
                let msg = format!("Failed to inspect SPA shell in {}: {}", output_path.display(), e);
                log.error(&msg);
                result.error(msg);
            }
        }
    }

    /// Decide how a route that failed to prerender is served.
    ///
    /// Registered routes fall back to client-side rendering at runtime;
    /// anything else has no fallback.
    pub fn handle_prerendering_failure(&self, route: &str, log: &mut BuildLog) -> FallbackDecision {
        log.warning(format!("Prerendering failed for route: {}", route));

        if self.registry.contains_route(route) {
            FallbackDecision {
                succeeded: true,
                message: format!("SPA routing will handle {} at runtime", route),
                fallback_route: Some(route.to_string()),
            }
        } else {
            FallbackDecision {
                succeeded: false,
                message: format!("No fallback available for invalid route: {}", route),
                fallback_route: None,
            }
        }
    }

    /// Human-readable report stamped with the current time
    pub fn generate_report(&self, result: &ValidationResult, log: &BuildLog) -> String {
        render_report(result, log, self.config.routes.len(), Utc::now())
    }

    /// Full post-build validation: fresh log, output check, fallback
    /// coverage for every route when the output is invalid, report and
    /// recommendations.
    pub fn validate_build_process(
        &self,
        output_path: &Path,
        options: &ValidationOptions,
    ) -> BuildOutcome {
        let mut log = BuildLog::new(options.filesystem_available);

        let validation = self.validate_output(output_path, options, &mut log);

        let fallbacks: Vec<FallbackDecision> = if validation.is_valid() {
            Vec::new()
        } else {
            self.config
                .routes
                .iter()
                .map(|route| self.handle_prerendering_failure(route, &mut log))
                .collect()
        };

        let report = self.generate_report(&validation, &log);
        let recommendations = recommendations(&validation, &fallbacks, &log);

        BuildOutcome {
            validation,
            fallbacks,
            report,
            recommendations,
            log,
        }
    }
}

fn recommendations(
    validation: &ValidationResult,
    fallbacks: &[FallbackDecision],
    log: &BuildLog,
) -> Vec<String> {
    let mut items = Vec::new();

    if !validation.is_valid() {
        items.push("Consider enabling fallback mechanisms for failed prerendering");
    }
    if !validation.warnings.is_empty() {
        items.push("Review and address validation warnings to improve SEO performance");
    }
    if !validation.missing_files.is_empty() {
        items.push("Ensure all configured routes are properly prerendered during build");
    }
    if fallbacks.iter().any(|f| !f.succeeded) {
        items.push("Some routes lack proper fallback mechanisms - consider SPA routing fallbacks");
    }
    if !log.errors().is_empty() {
        items.push("Address build errors to ensure reliable prerendering");
    }
    if items.is_empty() {
        items.push("Build validation passed successfully - no immediate actions required");
    }

    items.into_iter().map(String::from).collect()
}
