// Configuration module entry point
// Layered configuration: optional config file, environment, built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PLATFORM").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("assets.root", ".")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.enable_cors", false)?
            .set_default("solana.network", "mainnet-beta")?
            .set_default("solana.assume_api_key", true)?;

        // Deployment platforms hand out the listen port through PORT
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
