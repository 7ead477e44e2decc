// Server loop module
// Accepts connections until the process is stopped

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Main accept loop
///
/// Accept failures are transient (the peer may have gone away between accept
/// and handshake), so they are logged and the loop keeps going.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &state);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
