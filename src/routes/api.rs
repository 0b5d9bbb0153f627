//! Read-only vehicle pricing routes, mounted under `/api`.

use crate::config::CorsConfig;
use crate::handlers::{
    list_brands, list_fuels, list_models, list_models_by_year, list_years, list_years_by_model, price_history,
    suggestions,
};
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn api_routes(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/marcas", get(list_brands))
        .route("/modelos/:marca", get(list_models))
        .route("/modelos/:marca/:ano", get(list_models_by_year))
        .route("/anos/:marca", get(list_years))
        .route("/anos-por-modelo/:marca/:modelo", get(list_years_by_model))
        .route("/combustiveis/:marca/:modelo/:ano", get(list_fuels))
        .route("/precos", get(price_history))
        .route("/sugestoes", get(suggestions))
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = match cors {
        CorsConfig::AnyOrigin => AllowOrigin::any(),
        CorsConfig::Origins(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
