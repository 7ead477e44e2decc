// API module entry
// Mock platform endpoints consumed by the front-end

pub mod agents;
mod handlers;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::logger;

/// Paths under this prefix are API requests and never fall back to assets
pub const API_PREFIX: &str = "/api/";

/// API route handler
///
/// Dispatches to handler functions based on request path. Unknown paths
/// under the API prefix yield a JSON 404, never the SPA fallback.
pub fn handle_api(path: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let response = match path {
        "/api/health" => handlers::handle_health(is_head),
        "/api/solana/status" => handlers::handle_solana_status(state, is_head),
        "/api/agents" => handlers::handle_agents(state, is_head),
        // Unknown route
        _ => response::not_found(is_head),
    };

    if state.config.logging.access_log {
        let method = if is_head { "HEAD" } else { "GET" };
        logger::log_api_request(method, path, response.status().as_u16());
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn test_state() -> AppState {
        AppState::new(Config::test_default("."))
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_known_routes() {
        let state = test_state();
        for path in ["/api/health", "/api/solana/status", "/api/agents"] {
            let response = handle_api(path, &state, false);
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            assert_eq!(response.headers()["Content-Type"], "application/json");
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = test_state();
        let response = handle_api("/api/does-not-exist", &state, false);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"API endpoint not found"}"#);
    }

    #[test]
    fn test_exact_match_only() {
        let state = test_state();
        // The endpoint table is exact; longer paths are not prefix-matched
        let response = handle_api("/api/health/extra", &state, false);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = handle_api("/api/", &state, false);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_agents_record_shape() {
        let state = test_state();
        let json = body_json(handle_api("/api/agents", &state, false)).await;
        let agents = json.as_array().unwrap();
        assert_eq!(agents.len(), 2);
        for agent in agents {
            let record = agent.as_object().unwrap();
            for key in ["id", "name", "type", "status", "active", "wallets", "metrics"] {
                assert!(record.contains_key(key), "missing {key}");
            }
            let rate = agent["metrics"]["successRate"].as_f64().unwrap();
            assert!((0.0..=1.0).contains(&rate));
        }
    }

    #[tokio::test]
    async fn test_agents_idempotent_up_to_timestamps() {
        let state = test_state();
        let first = body_json(handle_api("/api/agents", &state, false)).await;
        let second = body_json(handle_api("/api/agents", &state, false)).await;

        let strip = |mut value: serde_json::Value| {
            for agent in value.as_array_mut().unwrap() {
                agent["metrics"]["lastExecution"] = serde_json::Value::Null;
            }
            value
        };
        assert_eq!(strip(first), strip(second));
    }

    #[tokio::test]
    async fn test_head_requests() {
        let state = test_state();
        let response = handle_api("/api/health", &state, true);
        assert_eq!(response.status(), StatusCode::OK);
        let content_length: usize = response.headers()["Content-Length"]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(content_length > 0);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
