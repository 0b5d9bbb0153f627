//! Price history and price-based suggestions.

use crate::error::AppError;
use crate::handlers::catalog::{parse_ano, require_text};
use crate::model::VehicleKey;
use crate::response::{PriceEntry, Suggestion};
use crate::service::{mean, parse_values};
use crate::state::AppState;
use crate::store::SUGGESTIONS_PER_SIDE;
use crate::extractors::ApiQuery;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<String>,
    pub combustivel: Option<String>,
}

impl PriceQuery {
    fn into_key(self) -> Result<VehicleKey, AppError> {
        let ano = require_text("ano", self.ano)?;
        Ok(VehicleKey {
            marca: require_text("marca", self.marca)?,
            modelo: require_text("modelo", self.modelo)?,
            ano: parse_ano(&ano)?,
            combustivel: require_text("combustivel", self.combustivel)?,
        })
    }
}

/// Query keys carrying suggestion values. Browsers send `valores[]` for repeated params.
const VALUE_KEYS: [&str; 2] = ["valores[]", "valores"];

pub async fn price_history(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PriceQuery>,
) -> Result<Json<Vec<PriceEntry>>, AppError> {
    let key = query.into_key()?;
    let history = state
        .store
        .price_history(&key)
        .await?
        .ok_or_else(|| AppError::NotFound("vehicle not found".into()))?;
    Ok(Json(state.labeler.label(history)))
}

pub async fn suggestions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> Result<Json<Vec<Suggestion>>, AppError> {
    let raw: Vec<String> = params
        .into_iter()
        .filter(|(k, _)| VALUE_KEYS.contains(&k.as_str()))
        .map(|(_, v)| v)
        .collect();
    let values = parse_values(&raw)?;
    let target = mean(&values)
        .ok_or_else(|| AppError::InvalidInput("values must average to a finite number".into()))?;
    tracing::debug!(count = values.len(), target, "suggestion target");

    let rows = state.store.nearest_current_prices(target, SUGGESTIONS_PER_SIDE).await?;
    Ok(Json(rows.into_iter().map(Suggestion::from).collect()))
}
