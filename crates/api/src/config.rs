use axum::http::HeaderValue;

use crate::auth::basic::AdminCredentials;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared through `AppState`; nothing reads the
/// environment after that.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite URL (default: `sqlite://contacts.db`).
    pub database_url: String,
    /// Upper bound on pooled SQLite connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Username/password guarding `/admin/contacts`.
    pub admin: AdminCredentials,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `DATABASE_URL`         | `sqlite://contacts.db`     |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:8000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_USERNAME`       | required                   |
    /// | `ADMIN_PASSWORD`       | required                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "8000"), "u16")?;
        let database_url = var("DATABASE_URL", "sqlite://contacts.db");
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS", "5"), "u32")?;
        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"), "u64")?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:8000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins.iter().find(|o| o.parse::<HeaderValue>().is_err()) {
            return Err(ConfigError::Invalid {
                name: "CORS_ORIGINS",
                expected: "origin",
                value: bad.clone(),
            });
        }

        let username = required(&lookup, "ADMIN_USERNAME")?;
        let password = required(&lookup, "ADMIN_PASSWORD")?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            admin: AdminCredentials::new(&username, &password),
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { name })
}
