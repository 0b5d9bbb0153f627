//! Catalog listing handlers: brands, models, years and fuel types.

use crate::error::AppError;
use crate::extractors::ApiPath;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Model years arrive as text in the path; anything that is not an integer is rejected
/// before a query runs.
pub(crate) fn parse_ano(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("ano must be an integer, got '{}'", raw)))
}

/// Text params are matched verbatim against stored values, so only a missing or empty
/// value is rejected.
pub(crate) fn require_text(name: &str, raw: Option<String>) -> Result<String, AppError> {
    raw.filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("{} is required", name)))
}

pub async fn list_brands(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.store.brands().await?))
}

pub async fn list_models(
    State(state): State<AppState>,
    ApiPath(marca): ApiPath<String>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.store.models(&marca).await?))
}

pub async fn list_years(
    State(state): State<AppState>,
    ApiPath(marca): ApiPath<String>,
) -> Result<Json<Vec<i32>>, AppError> {
    Ok(Json(state.store.years(&marca).await?))
}

pub async fn list_models_by_year(
    State(state): State<AppState>,
    ApiPath((marca, ano)): ApiPath<(String, String)>,
) -> Result<Json<Vec<String>>, AppError> {
    let ano = parse_ano(&ano)?;
    Ok(Json(state.store.models_by_year(&marca, ano).await?))
}

pub async fn list_years_by_model(
    State(state): State<AppState>,
    ApiPath((marca, modelo)): ApiPath<(String, String)>,
) -> Result<Json<Vec<i32>>, AppError> {
    Ok(Json(state.store.years_by_model(&marca, &modelo).await?))
}

pub async fn list_fuels(
    State(state): State<AppState>,
    ApiPath((marca, modelo, ano)): ApiPath<(String, String, String)>,
) -> Result<Json<Vec<String>>, AppError> {
    let ano = parse_ano(&ano)?;
    Ok(Json(state.store.fuels(&marca, &modelo, ano).await?))
}
