use crate::log::BuildLog;
use chrono::{DateTime, SecondsFormat, Utc};
use seo_kit_validator::ValidationResult;

/// Render the validation report.
///
/// Sections are omitted when their list is empty; the summary always lists
/// every count. Output depends only on the arguments.
pub fn render_report(
    result: &ValidationResult,
    log: &BuildLog,
    total_routes: usize,
    generated_at: DateTime<Utc>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Prerendering Validation Report ===".to_string());
    lines.push(format!(
        "Status: {}",
        if result.is_valid() { "PASSED" } else { "FAILED" }
    ));
    lines.push(format!(
        "Timestamp: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    lines.push(String::new());

    section(&mut lines, "✓ Valid Files:", &result.valid_files);
    section(&mut lines, "✗ Missing Files:", &result.missing_files);
    section(&mut lines, "⚠ Warnings:", &result.warnings);
    section(&mut lines, "✗ Errors:", &result.errors);
    section(&mut lines, "📋 Build Errors:", log.errors());
    section(&mut lines, "📋 Build Warnings:", log.warnings());

    lines.push("=== Summary ===".to_string());
    lines.push(format!("Total routes: {}", total_routes));
    lines.push(format!("Valid files: {}", result.valid_files.len()));
    lines.push(format!("Missing files: {}", result.missing_files.len()));
    lines.push(format!("Warnings: {}", result.warnings.len()));
    lines.push(format!("Errors: {}", result.errors.len()));
    lines.push(format!("Build errors: {}", log.errors().len()));
    lines.push(format!("Build warnings: {}", log.warnings().len()));

    lines.join("\n")
}

fn section(lines: &mut Vec<String>, header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(header.to_string());
    lines.extend(items.iter().map(|item| format!("  - {}", item)));
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_passing_report_omits_empty_sections() {
        let mut result = ValidationResult::new();
        result.valid_files.push("dist/red-studio/index.html".to_string());
        let log = BuildLog::new(false);

        let report = render_report(&result, &log, 3, at());

        assert!(report.starts_with("=== Prerendering Validation Report ===\nStatus: PASSED"));
        assert!(report.contains("Timestamp: 2025-03-01T12:00:00.000Z"));
        assert!(report.contains("✓ Valid Files:\n  - dist/red-studio/index.html"));
        assert!(!report.contains("Missing Files:"));
        assert!(!report.contains("Errors:\n"));
        assert!(!report.contains("⚠ Warnings:"));
        assert!(!report.contains("Build Errors:"));
        assert!(!report.contains("Build Warnings:"));
        assert!(report.ends_with("Build errors: 0\nBuild warnings: 0"));
    }

    #[test]
    fn test_empty_result_has_no_valid_files_header() {
        let report = render_report(&ValidationResult::new(), &BuildLog::new(false), 0, at());
        assert!(!report.contains("Valid Files:"));
        assert!(!report.contains("Missing Files:"));
        assert!(report.contains("Total routes: 0"));
    }

    #[test]
    fn test_failing_report_lists_everything() {
        let mut result = ValidationResult::new();
        result.missing_files.push("dist/green-studio/index.html".to_string());
        result.warning("Route /about doesn't match expected studio pattern");
        result.error("No prerendered file for route /about and no SPA fallback");
        let mut log = BuildLog::new(false);
        log.error("render timed out");
        log.warning("Prerendering failed for route: /green-studio");

        let report = render_report(&result, &log, 3, at());

        assert!(report.contains("Status: FAILED"));
        assert!(report.contains("✗ Missing Files:\n  - dist/green-studio/index.html"));
        assert!(report.contains("⚠ Warnings:\n  - Route /about"));
        assert!(report.contains("✗ Errors:\n  - No prerendered file"));
        assert!(report.contains("📋 Build Errors:\n  - ["));
        assert!(report.contains("BUILD ERROR: render timed out"));
        assert!(report.contains("📋 Build Warnings:"));
        assert!(report.contains("Total routes: 3"));
        assert!(report.contains("Missing files: 1"));
        assert!(report.contains("Warnings: 1"));
        assert!(report.contains("Errors: 1"));
        assert!(report.contains("Build errors: 1"));
        assert!(report.contains("Build warnings: 1"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut result = ValidationResult::new();
        result.warning("w");
        let log = BuildLog::new(false);
        assert_eq!(
            render_report(&result, &log, 1, at()),
            render_report(&result, &log, 1, at())
        );
    }
}
