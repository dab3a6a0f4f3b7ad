//! Application State

use std::sync::Arc;

use crate::application::{BeerRepository, BeerService};

/// Shared state injected into every handler.
pub struct AppState {
    pub beer_service: BeerService,
}

impl AppState {
    pub fn new(beer_repo: Arc<dyn BeerRepository>) -> Self {
        Self {
            beer_service: BeerService::new(beer_repo),
        }
    }
}
