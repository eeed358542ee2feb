// Configuration module entry point
// Loads settings from file, environment and defaults; builds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::{AppState, StaticRoot};
pub use types::{
    Config, HttpConfig, LogLevel, LoggingConfig, PerformanceConfig, ServerConfig,
    StaticFilesConfig,
};

/// Config file consulted when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Plain port variable, honoured on top of every other source
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3080;

impl Config {
    /// Load configuration using the first CLI argument as config path, if any
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::build(config_path, std::env::var(PORT_ENV).ok())
    }

    fn build(config_path: &str, port: Option<String>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("static_files.root", "dist")?
            .set_default("static_files.index_file", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 60)?
            .set_default("http.server_name", "dist_server")?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
