//! Vehicle store: the read queries behind every endpoint.
//!
//! Handlers only see the [`VehicleStore`] trait; [`PgVehicleStore`] runs the queries in
//! [`crate::sql`] against a shared `PgPool`. Connections are checked out per call and go
//! back to the pool when dropped, on every return path.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::model::{CurrentPrice, PriceObservation, VehicleKey};
use crate::sql;

/// Rows returned on each side of the suggestion target.
pub const SUGGESTIONS_PER_SIDE: i64 = 5;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Distinct brands, ascending.
    async fn brands(&self) -> Result<Vec<String>, AppError>;

    /// Distinct models of a brand, ascending.
    async fn models(&self, marca: &str) -> Result<Vec<String>, AppError>;

    /// Distinct years of a brand, descending.
    async fn years(&self, marca: &str) -> Result<Vec<i32>, AppError>;

    /// Distinct models of a brand in one year, ascending.
    async fn models_by_year(&self, marca: &str, ano: i32) -> Result<Vec<String>, AppError>;

    /// Distinct years of one model, descending.
    async fn years_by_model(&self, marca: &str, modelo: &str) -> Result<Vec<i32>, AppError>;

    /// Distinct fuel types of a model/year, ascending.
    async fn fuels(&self, marca: &str, modelo: &str, ano: i32) -> Result<Vec<String>, AppError>;

    /// Price observations of the vehicle identified by `key`, newest first.
    /// `None` when no vehicle matches the key.
    async fn price_history(&self, key: &VehicleKey) -> Result<Option<Vec<PriceObservation>>, AppError>;

    /// Up to `per_side` vehicles priced below `target` (closest first) followed by up to
    /// `per_side` priced at or above it (closest first), using each vehicle's price at the
    /// dataset-wide latest reference date.
    async fn nearest_current_prices(&self, target: f64, per_side: i64) -> Result<Vec<CurrentPrice>, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Build the connection pool from config. The pool connects lazily so the server can
/// start (and report not-ready) while the database is down.
pub fn connect_pool(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(config.connect_options.clone())
}

#[derive(Clone)]
pub struct PgVehicleStore {
    pool: PgPool,
}

impl PgVehicleStore {
    pub fn new(pool: PgPool) -> Self {
        PgVehicleStore { pool }
    }

    async fn strings(&self, sql: &str, params: &[&str]) -> Result<Vec<String>, AppError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_scalar::<Postgres, String>(sql);
        for p in params {
            query = query.bind(*p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}

#[async_trait]
impl VehicleStore for PgVehicleStore {
    async fn brands(&self) -> Result<Vec<String>, AppError> {
        self.strings(sql::SELECT_BRANDS, &[]).await
    }

    async fn models(&self, marca: &str) -> Result<Vec<String>, AppError> {
        self.strings(sql::SELECT_MODELS_BY_BRAND, &[marca]).await
    }

    async fn years(&self, marca: &str) -> Result<Vec<i32>, AppError> {
        tracing::debug!(sql = %sql::SELECT_YEARS_BY_BRAND, marca, "query");
        let years = sqlx::query_scalar::<_, i32>(sql::SELECT_YEARS_BY_BRAND)
            .bind(marca)
            .fetch_all(&self.pool)
            .await?;
        Ok(years)
    }

    async fn models_by_year(&self, marca: &str, ano: i32) -> Result<Vec<String>, AppError> {
        tracing::debug!(sql = %sql::SELECT_MODELS_BY_BRAND_YEAR, marca, ano, "query");
        let models = sqlx::query_scalar::<_, String>(sql::SELECT_MODELS_BY_BRAND_YEAR)
            .bind(marca)
            .bind(ano)
            .fetch_all(&self.pool)
            .await?;
        Ok(models)
    }

    async fn years_by_model(&self, marca: &str, modelo: &str) -> Result<Vec<i32>, AppError> {
        tracing::debug!(sql = %sql::SELECT_YEARS_BY_BRAND_MODEL, marca, modelo, "query");
        let years = sqlx::query_scalar::<_, i32>(sql::SELECT_YEARS_BY_BRAND_MODEL)
            .bind(marca)
            .bind(modelo)
            .fetch_all(&self.pool)
            .await?;
        Ok(years)
    }

    async fn fuels(&self, marca: &str, modelo: &str, ano: i32) -> Result<Vec<String>, AppError> {
        tracing::debug!(sql = %sql::SELECT_FUELS, marca, modelo, ano, "query");
        let fuels = sqlx::query_scalar::<_, String>(sql::SELECT_FUELS)
            .bind(marca)
            .bind(modelo)
            .bind(ano)
            .fetch_all(&self.pool)
            .await?;
        Ok(fuels)
    }

    async fn price_history(&self, key: &VehicleKey) -> Result<Option<Vec<PriceObservation>>, AppError> {
        // Both statements share one checked-out connection.
        let mut conn = self.pool.acquire().await?;

        tracing::debug!(sql = %sql::SELECT_VEHICLE_IDS, key = ?key, "query");
        let ids = sqlx::query_scalar::<_, i64>(sql::SELECT_VEHICLE_IDS)
            .bind(key.marca.as_str())
            .bind(key.modelo.as_str())
            .bind(key.ano)
            .bind(key.combustivel.as_str())
            .fetch_all(&mut *conn)
            .await?;
        let Some(&id) = ids.first() else {
            return Ok(None);
        };
        if ids.len() > 1 {
            tracing::warn!(key = ?key, id, "vehicle key matches several ids; using the lowest");
        }

        tracing::debug!(sql = %sql::SELECT_PRICE_HISTORY, id, "query");
        let history = sqlx::query_as::<_, PriceObservation>(sql::SELECT_PRICE_HISTORY)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(Some(history))
    }

    async fn nearest_current_prices(&self, target: f64, per_side: i64) -> Result<Vec<CurrentPrice>, AppError> {
        tracing::debug!(sql = %sql::SELECT_NEAREST_CURRENT_PRICES, target, per_side, "query");
        let rows = sqlx::query_as::<_, CurrentPrice>(sql::SELECT_NEAREST_CURRENT_PRICES)
            .bind(target)
            .bind(per_side)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(sql::PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}
