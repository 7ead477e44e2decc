use std::sync::Arc;

mod api;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Create the Tokio runtime, sizing worker threads from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = runtime_workers(&cfg) {
        runtime_builder.worker_threads(workers);
        println!("[CONFIG] Using {workers} worker threads");
    } else {
        println!("[CONFIG] Using default worker threads (CPU cores)");
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

/// Worker thread count for the runtime builder
///
/// Tokio rejects a zero thread count, so `workers = 0` falls back to the
/// CPU-count default.
fn runtime_workers(cfg: &config::Config) -> Option<usize> {
    cfg.server.workers.filter(|&workers| workers > 0)
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg));

    logger::log_server_start(&addr, &state.config);

    server::start_server_loop(listener, state).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_workers_treats_zero_as_unset() {
        let mut cfg = config::Config::test_default(".");

        cfg.server.workers = Some(0);
        assert_eq!(runtime_workers(&cfg), None);

        cfg.server.workers = Some(4);
        assert_eq!(runtime_workers(&cfg), Some(4));

        cfg.server.workers = None;
        assert_eq!(runtime_workers(&cfg), None);
    }
}
