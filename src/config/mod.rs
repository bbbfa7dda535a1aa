// Configuration loading
// Defaults in code, overlaid by an optional file and SPORTZHUB_* environment variables

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::Config;

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

impl Config {
    /// Load configuration from specified file path (without extension)
    /// The file is optional; environment variables prefixed `SPORTZHUB_` override it
    /// (nested keys separated by `__`, e.g. `SPORTZHUB_SERVER__PORT`)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::with_defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SPORTZHUB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Built-in defaults only, ignoring files and environment
    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::with_defaults()?.build()?.try_deserialize()
    }

    fn with_defaults() -> Result<Builder, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_body", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("http.server_name", "SportzHub-Mock/1.0")?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("http.keep_alive", true)?
            .set_default("http.request_timeout", 30)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
