//! Shared application state for all routes. Holds no per-request data.

use crate::service::PriceLabeler;
use crate::store::VehicleStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VehicleStore>,
    pub labeler: Arc<PriceLabeler>,
}

impl AppState {
    pub fn new(store: Arc<dyn VehicleStore>, labeler: PriceLabeler) -> Self {
        AppState {
            store,
            labeler: Arc::new(labeler),
        }
    }
}
