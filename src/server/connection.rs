// Connection handling module
// Accepts a single TCP connection and serves HTTP/1.1 over it

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection and hand it to a serving task
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) {
    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, Arc::clone(state));
}

/// Serve a single connection in a spawned task
///
/// Connections are independent; a protocol error on one is logged and the
/// others carry on.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        // Build HTTP/1 connection with keep-alive support
        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
