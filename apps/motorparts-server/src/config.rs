//! Server configuration, layered YAML file then environment
//!
//! Every setting has a default so the server starts with zero
//! configuration for local development. Environment overrides use the
//! `MOTORPARTS_` prefix with `__` between nesting levels, e.g.
//! `MOTORPARTS_DATABASE__PASSWORD`.

use backoffice::config::BackofficeConfig;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpConfig,

    /// MySQL connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Token signing settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Back-office module settings
    #[serde(default)]
    pub backoffice: BackofficeConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// MySQL connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database host
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Database user
    #[serde(default = "default_db_user")]
    pub user: String,

    /// Database password
    #[serde(default)]
    pub password: String,

    /// Database name
    #[serde(default = "default_db_name")]
    pub name: String,

    /// Connection pool upper bound
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: String::new(),
            name: default_db_name(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// MySQL connection URL
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Token signing settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// HS256 signing secret; override it outside development
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
        }
    }
}

/// Read the YAML file (when present), then apply environment overrides.
pub fn load(path: &Path) -> Result<AppConfig, figment::Error> {
    Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::prefixed("MOTORPARTS_").split("__"))
        .extract()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_db_host() -> String {
    "127.0.0.1".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "motorparts".to_string()
}

fn default_db_name() -> String {
    "motorparts".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}
