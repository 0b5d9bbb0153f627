//! Router assembly.

mod api;
mod common;
pub use api::api_routes;
pub use common::common_routes;

use crate::config::CorsConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router: common routes at the root, pricing routes under `/api`.
pub fn app_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state, cors))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
