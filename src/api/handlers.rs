// Platform API handlers module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::agents::AgentRecord;
use super::response::json_response;
use crate::config::AppState;

/// Environment variable holding the Solana RPC API key
const API_KEY_ENV: &str = "SOLANA_RPC_API_KEY";
/// Environment variable holding a custom RPC endpoint URL
const CUSTOM_RPC_ENV: &str = "INSTANT_NODES_RPC_URL";

/// Timestamp layout used across the API; millis are pinned to zero
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SolanaStatus {
    status: &'static str,
    custom_rpc: bool,
    api_key: bool,
    network: String,
    timestamp: String,
}

/// Liveness check for the platform
pub fn handle_health(is_head: bool) -> Response<Full<Bytes>> {
    let health = HealthResponse {
        status: "ok",
        message: "Solana Trading Platform server is running",
    };
    json_response(StatusCode::OK, &health, is_head)
}

/// Solana connection status
pub fn handle_solana_status(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let has_api_key = std::env::var_os(API_KEY_ENV).is_some();
    let has_custom_rpc = std::env::var_os(CUSTOM_RPC_ENV).is_some();

    let status = SolanaStatus {
        status: "operational",
        custom_rpc: has_custom_rpc,
        // With assume_api_key set (the default) this is always true, matching
        // what the deployed front-end expects from the demo environment.
        api_key: has_api_key || state.config.solana.assume_api_key,
        network: state.config.solana.network.clone(),
        timestamp: utc_timestamp(),
    };
    json_response(StatusCode::OK, &status, is_head)
}

/// Agent catalog, stamped with the current time
pub fn handle_agents(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let now = utc_timestamp();
    let agents: Vec<AgentRecord> = state.agents.iter().map(|a| a.stamped(&now)).collect();
    json_response(StatusCode::OK, &agents, is_head)
}

/// Current UTC time in the platform's timestamp layout
fn utc_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
