//! Validation of prerendered HTML snapshots and build output.

pub mod html;
pub mod result;
pub mod scan;

pub use html::{HtmlIssue, check_html, validate_html};
pub use result::ValidationResult;
pub use scan::{SpaShell, expected_file_path, find_prerendered_pages, inspect_spa_shell};
