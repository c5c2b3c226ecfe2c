use std::env;
use std::str::FromStr;
use std::time::Duration;

use day_planner_postgres::RetryPolicy;
use dotenvy::dotenv;

use crate::error::{AppError, Result};

/// Which backing store serves the activity repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Postgres,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "postgres" => Ok(StoreKind::Postgres),
            other => Err(AppError::Config(format!(
                "Invalid ACTIVITY_STORE '{other}', expected 'memory' or 'postgres'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub store_retry_attempts: u32,
    pub store_retry_base_delay_ms: u64,

    // Loads the sample activities into an empty in-memory store
    pub seed_store: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            store: StoreKind::Memory,
            database_url: None,
            database_max_connections: 5,
            store_retry_attempts: 3,
            store_retry_base_delay_ms: 100,
            seed_store: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        tracing::info!(store = ?config.store, "Application configuration loaded");
        Ok(config)
    }

    /// Builds the configuration from any variable source, falling back to
    /// the defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let store = match lookup("ACTIVITY_STORE") {
            Some(value) => value.parse()?,
            None => defaults.store,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(AppError::Config(
                "DATABASE_URL is required when ACTIVITY_STORE=postgres".to_string(),
            ));
        }

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port)?,
            store,
            database_url,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            store_retry_attempts: parse_or(
                &lookup,
                "STORE_RETRY_ATTEMPTS",
                defaults.store_retry_attempts,
            )?,
            store_retry_base_delay_ms: parse_or(
                &lookup,
                "STORE_RETRY_BASE_DELAY_MS",
                defaults.store_retry_base_delay_ms,
            )?,
            seed_store: parse_or(&lookup, "SEED_STORE", defaults.seed_store)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.store_retry_attempts,
            Duration::from_millis(self.store_retry_base_delay_ms),
        )
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {name} value '{raw}': {e}"))),
        None => Ok(default),
    }
}
