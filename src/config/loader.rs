//! Load [`AppConfig`] from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use chrono::Locale;
use sqlx::postgres::PgConnectOptions;

use crate::config::types::{AppConfig, CorsConfig, DatabaseConfig, LabelConfig};
use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

impl AppConfig {
    /// Read config from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read config through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse::<SocketAddr>())?;

        let connect_options = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).map_err(|e| ConfigError::Invalid {
                key: "DATABASE_URL",
                reason: e.to_string(),
            })?,
            None => {
                let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
                let user = get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
                let host = get("DB_HOST").unwrap_or_else(|| "localhost".into());
                let mut options = PgConnectOptions::new().host(&host).database(&name).username(&user);
                if let Some(password) = get("DB_PASSWORD") {
                    options = options.password(&password);
                }
                options
            }
        };

        let database = DatabaseConfig {
            connect_options,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Ok(DEFAULT_MAX_CONNECTIONS))?,
            acquire_timeout_secs: parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                Ok(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            )?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        let mut labels = LabelConfig::default();
        if let Some(name) = get("PRICE_LABEL_LOCALE") {
            labels.locale = parse_locale(&name)?;
        }
        if let Some(label) = get("CURRENT_PRICE_LABEL") {
            labels.current_label = label;
        }

        let cors = parse_cors(get("CORS_ALLOWED_ORIGINS").as_deref());

        Ok(AppConfig {
            bind_addr,
            database,
            labels,
            cors,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: Result<T, T::Err>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = match raw {
        Some(s) => s.parse::<T>(),
        None => default,
    };
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

/// Accepts `pt_BR`, `pt-BR` and `pt_BR.UTF-8` style names.
fn parse_locale(name: &str) -> Result<Locale, ConfigError> {
    let normalized = name.split('.').next().unwrap_or(name).replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| ConfigError::Invalid {
        key: "PRICE_LABEL_LOCALE",
        reason: format!("unknown locale '{}'", name),
    })
}

fn parse_cors(raw: Option<&str>) -> CorsConfig {
    match raw {
        None | Some("*") => CorsConfig::AnyOrigin,
        Some(list) => CorsConfig::Origins(
            list.split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        ),
    }
}
