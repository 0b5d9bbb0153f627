//! FIPE API: read-only REST access to vehicle brands, models, years, fuel types and price
//! history, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, CorsConfig, DatabaseConfig, LabelConfig};
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app_router, common_routes};
pub use service::PriceLabeler;
pub use state::AppState;
pub use store::{connect_pool, PgVehicleStore, VehicleStore};
