// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub solana: SolanaConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Static asset configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory the front-end bundle is served from
    pub root: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
}

/// Solana platform configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SolanaConfig {
    /// Cluster reported by the status endpoint
    pub network: String,
    /// Report the RPC API key as present even when the environment variable
    /// is absent. The deployed front-end expects `apiKey: true`.
    pub assume_api_key: bool,
}

#[cfg(test)]
impl Config {
    /// Baseline configuration for unit tests, independent of files and env vars
    pub fn test_default(assets_root: &str) -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                workers: None,
            },
            assets: AssetsConfig {
                root: assets_root.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_file: None,
                error_log_file: None,
            },
            http: HttpConfig { enable_cors: false },
            solana: SolanaConfig {
                network: "mainnet-beta".to_string(),
                assume_api_key: true,
            },
        }
    }
}
