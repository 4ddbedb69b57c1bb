//! Server configuration loaded from the environment.
//!
//! Environment variables must be set by the runtime environment:
//! - `BACKEND_HOST` (default `0.0.0.0`)
//! - `BACKEND_PORT` (default `3001`)
//! - `CORS_ALLOWED_ORIGINS`, comma-separated http(s) origins
//!   (default: localhost:3000 and 127.0.0.1:3000)

use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            env::var("BACKEND_HOST").ok(),
            env::var("BACKEND_PORT").ok(),
            env::var("CORS_ALLOWED_ORIGINS").ok(),
        )
    }

    /// Build from raw values; `None` or blank means "use the default".
    pub fn from_values(
        host: Option<String>,
        port: Option<String>,
        cors_origins: Option<String>,
    ) -> Result<Self, AppError> {
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got {raw:?}"))
            })?,
        };

        Ok(Self {
            host,
            port,
            cors_origins: parse_origins(cors_origins.as_deref().unwrap_or_default()),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: FALLBACK_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Keep http(s) entries, drop blanks and `null`; fall back to localhost.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        FALLBACK_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        origins
    }
}
