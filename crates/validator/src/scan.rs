//! Inspection of a build output directory on disk.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

const INDEX_HTML: &str = "index.html";
const ASSETS_DIR: &str = "assets";
const ROOT_ELEMENT: &str = "<div id=\"root\">";
const MAX_SCAN_DEPTH: usize = 6;

/// Expected snapshot location for a route: `{output}/{route without leading /}/index.html`
pub fn expected_file_path(output_path: &str, route: &str) -> String {
    let route_path = route.strip_prefix('/').unwrap_or(route);
    format!("{}/{}/{}", output_path, route_path, INDEX_HTML)
}

/// State of the client-rendered application shell in an output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaShell {
    pub index_exists: bool,
    /// Shell index.html carries the client mount point
    pub has_root_element: bool,
    pub assets_exists: bool,
}

pub fn inspect_spa_shell(output_dir: &Path) -> io::Result<SpaShell> {
    let index = output_dir.join(INDEX_HTML);
    let index_exists = index.is_file();
    let has_root_element = if index_exists {
        fs::read_to_string(&index)?.contains(ROOT_ELEMENT)
    } else {
        false
    };

    Ok(SpaShell {
        index_exists,
        has_root_element,
        assets_exists: output_dir.join(ASSETS_DIR).is_dir(),
    })
}

/// Routes that have a prerendered `index.html` below the output root.
///
/// The shell index and anything under `assets/` are ignored. Results are
/// sorted for stable reporting.
pub fn find_prerendered_pages(output_dir: &Path) -> Vec<String> {
    let mut routes: Vec<String> = WalkDir::new(output_dir)
        .min_depth(2)
        .max_depth(MAX_SCAN_DEPTH)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == INDEX_HTML)
        .filter_map(|e| {
            let parent = e.path().parent()?.strip_prefix(output_dir).ok()?;
            let segments: Vec<String> = parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            if segments.first().is_some_and(|s| s == ASSETS_DIR) {
                return None;
            }
            Some(format!("/{}", segments.join("/")))
        })
        .collect();

    routes.sort();
    routes
}
