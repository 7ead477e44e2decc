//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation
//! and dispatching between the API and static assets.

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    // The query string plays no part in routing
    let path = uri.path();
    let is_head = *method == Method::HEAD;

    if state.config.logging.access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Dispatch between the API and static assets
    Ok(route_request(path, &state, is_head).await)
}

/// Route request based on path
async fn route_request(path: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    // API paths win over asset resolution, even for unknown endpoints
    if path.starts_with(api::API_PREFIX) {
        return api::handle_api(path, state, is_head);
    }

    static_files::serve_asset(path, state, is_head).await
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state_for(root: &std::path::Path) -> AppState {
        AppState::new(Config::test_default(root.to_str().unwrap()))
    }

    #[test]
    fn test_get_and_head_pass() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());
    }

    #[test]
    fn test_options_is_answered() {
        let response = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(response.status(), 204);
    }

    #[test]
    fn test_other_methods_rejected() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = check_http_method(&method, false).unwrap();
            assert_eq!(response.status(), 405);
            assert_eq!(response.headers()["Allow"], "GET, HEAD, OPTIONS");
        }
    }

    #[tokio::test]
    async fn test_api_prefix_never_reaches_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>spa</html>").unwrap();
        let state = state_for(dir.path());

        let response = route_request("/api/unknown", &state, false).await;
        assert_eq!(response.status(), 404);
        assert_eq!(response.headers()["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_api_without_trailing_slash_is_an_asset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>spa</html>").unwrap();
        let state = state_for(dir.path());

        // "/api" misses the prefix and resolves through the asset chain
        let response = route_request("/api", &state, false).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "text/html");
    }
}
