//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Domain-level tunables.
    #[serde(default)]
    pub app: AppConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public URL of this instance.
    pub url: String,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Domain-level tunables for the cataloguing core.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Lowest accepted rating value (inclusive).
    #[serde(default = "default_rating_min")]
    pub rating_min: f64,
    /// Highest accepted rating value (inclusive).
    #[serde(default = "default_rating_max")]
    pub rating_max: f64,
    /// Hard cap on slug collision probes before giving up.
    #[serde(default = "default_slug_max_attempts")]
    pub slug_max_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rating_min: default_rating_min(),
            rating_max: default_rating_max(),
            slug_max_attempts: default_slug_max_attempts(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_connections() -> u32 {
    100
}

const fn default_min_connections() -> u32 {
    5
}

const fn default_rating_min() -> f64 {
    0.5
}

const fn default_rating_max() -> f64 {
    10.0
}

const fn default_slug_max_attempts() -> u32 {
    200
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` file (if present)
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `REELIST_ENV`)
    /// 4. Environment variables with `REELIST_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("REELIST_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("REELIST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("REELIST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let app = AppConfig::default();
        assert_eq!(app.rating_min, 0.5);
        assert_eq!(app.rating_max, 10.0);
        assert_eq!(app.slug_max_attempts, 200);
    }
}
