use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

pub const DEFAULT_LOG_FILTER: &str = "taskboard_api=debug,taskboard_core=debug,tower_http=debug";

/// Server settings, read from defaults overlaid with environment variables
/// (`API_HOST`, `API_PORT`, `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `LOG_FILTER`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_host: String,
    pub api_port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub log_filter: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("api_host", "0.0.0.0")?
            .set_default("api_port", 3000_i64)?
            .set_default("db_max_connections", 5_i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.api_port = port;
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
