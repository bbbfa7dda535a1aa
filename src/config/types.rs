// Configuration types
// Mirrors the `[server]`, `[logging]`, `[http]` and `[data]` tables of config.toml

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Bind address
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Shown in the startup banner
    pub level: String,
    /// Write one access line per request
    pub access_log: bool,
    /// Also log POST payloads
    pub show_body: bool,
    /// `combined`, `common`, `json` or a `$variable` pattern
    #[serde(default = "combined")]
    pub access_log_format: String,
    /// Info and access lines; stdout when unset
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Errors and warnings; stderr when unset
    #[serde(default)]
    pub error_log_file: Option<String>,
}

fn combined() -> String {
    "combined".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Value of the `Server` response header
    pub server_name: String,
    /// Largest accepted request body, in bytes
    pub max_body_size: u64,
    pub keep_alive: bool,
    /// Upper bound on a connection's lifetime, in seconds
    pub request_timeout: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// TOML file replacing the built-in users and courts
    #[serde(default)]
    pub seed_file: Option<String>,
}
