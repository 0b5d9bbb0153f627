//! Runtime configuration types.

use std::net::SocketAddr;

use chrono::Locale;
use sqlx::postgres::PgConnectOptions;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub labels: LabelConfig,
    pub cors: CorsConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// How price history rows are labelled.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelConfig {
    /// Month names are rendered in this locale.
    pub locale: Locale,
    /// Label of the newest row.
    pub current_label: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            locale: Locale::en_US,
            current_label: "Current Value".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsConfig {
    AnyOrigin,
    Origins(Vec<String>),
}
