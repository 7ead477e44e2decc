//! Static file serving module
//!
//! Handles static file loading, MIME type detection, and the single-page-app
//! fallback chain.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve a static asset for the given request path
///
/// Resolution order: the exact file under the asset root, then the root
/// index document, then a plain 404. Anything that keeps a file from being
/// read (missing, unreadable, outside the root) moves to the next step.
pub async fn serve_asset(path: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let root = &state.config.assets.root;

    // The bare root maps to the front-end entry document
    let request_path = if path == "/" { "/index.html" } else { path };

    if let Some(content) = load_asset(root, request_path).await {
        let content_type =
            mime::get_content_type(Path::new(request_path).extension().and_then(|e| e.to_str()));
        if state.config.logging.access_log {
            logger::log_response(request_path, content.len());
        }
        return http::response::build_file_response(Bytes::from(content), content_type, is_head);
    }

    // Unknown paths are client-side routes; hand them the entry document
    if let Some(content) = load_index(root).await {
        if state.config.logging.access_log {
            logger::log_response(INDEX_FILE, content.len());
        }
        return http::response::build_file_response(Bytes::from(content), "text/html", is_head);
    }

    http::build_404_response(is_head)
}

/// Load an asset from the root directory
///
/// Dots in filenames are left untouched; the containment check below is
/// what keeps resolution inside the root.
async fn load_asset(root: &str, path: &str) -> Option<Vec<u8>> {
    let file_path = Path::new(root).join(path.trim_start_matches('/'));

    // Security: ensure file_path is within the asset root
    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!("Asset root not found or inaccessible '{root}': {e}"));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    match fs::read(&file_path_canonical).await {
        Ok(content) => Some(content),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            None
        }
    }
}

/// Load the front-end entry document; any failure is treated as missing
async fn load_index(root: &str) -> Option<Vec<u8>> {
    fs::read(Path::new(root).join(INDEX_FILE)).await.ok()
}
