// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database: DatabaseSettings,
    listen_addr: String,
    allowed_origins: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_port() -> String {
    "8080".into()
}

fn default_client_origin() -> String {
    "http://localhost:5173".into()
}

/// Dev-server origins always allowed next to `CLIENT_ORIGIN`.
const EXTRA_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get("DATABASE_URL").or_else(|| get("DB_DSN")).unwrap_or_else(|| {
            let host = get("DB_HOST").unwrap_or_else(|| "localhost".into());
            let port = get("DB_PORT").unwrap_or_else(|| "5432".into());
            let user = get("DB_USER").unwrap_or_else(|| "postgres".into());
            let password = get("DB_PASSWORD").unwrap_or_default();
            let name = get("DB_NAME").unwrap_or_else(|| "article_db".into());
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        });

        let database = DatabaseSettings {
            url,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_or(get("DB_MIN_CONNECTIONS"), "DB_MIN_CONNECTIONS", 5)?,
            max_lifetime: Duration::from_secs(parse_or(
                get("DB_MAX_LIFETIME_SECS"),
                "DB_MAX_LIFETIME_SECS",
                300,
            )?),
            idle_timeout: Duration::from_secs(parse_or(
                get("DB_IDLE_TIMEOUT_SECS"),
                "DB_IDLE_TIMEOUT_SECS",
                60,
            )?),
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid(
                "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS".into(),
            ));
        }

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(|| {
            let port = get("PORT").unwrap_or_else(default_port);
            format!("0.0.0.0:{port}")
        });

        let allowed_origins = get("ALLOWED_ORIGINS").map_or_else(
            || {
                let client = get("CLIENT_ORIGIN").unwrap_or_else(default_client_origin);
                std::iter::once(client)
                    .chain(EXTRA_ORIGINS.iter().map(ToString::to_string))
                    .collect()
            },
            |s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            },
        );

        Ok(Self {
            database,
            listen_addr,
            allowed_origins,
        })
    }

    pub fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Origins allowed by the CORS layer.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer"))),
        None => Ok(default),
    }
}
