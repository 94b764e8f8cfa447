// src/config.rs
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    /// SQLite file, opened lazily once per worker thread.
    pub db_path: String,
    pub schema_path: String,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "landing.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `LANDING_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind: parsed_or(&lookup, "LANDING_BIND", defaults.bind),
            db_path: lookup("LANDING_DB_PATH").unwrap_or(defaults.db_path),
            schema_path: lookup("LANDING_SCHEMA_PATH").unwrap_or(defaults.schema_path),
            max_workers: parsed_or(&lookup, "LANDING_MAX_WORKERS", defaults.max_workers),
        }
    }
}

fn parsed_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring unparseable {key}={raw:?}, using default");
            default
        }),
    }
}
