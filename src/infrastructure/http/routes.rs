//! HTTP Routes
//!
//! API Endpoints:
//! - /ping         GET  health check
//! - /beers        any  method dispatch (GET list, POST create)
//! - /beers/{id}   any  method dispatch (GET one)
//!
//! All three `/beers` routes land in the same dispatcher, which inspects the
//! method and the raw path itself. The wildcard route exists so identifiers
//! containing embedded separators still reach the dispatcher intact; axum
//! path captures are deliberately not used for the identifier.

use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// Build the router.
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        // a wildcard doesn't match the bare or trailing-slash path, so all
        // three spellings are registered explicitly
        .route("/beers", any(handlers::dispatch_beers))
        .route("/beers/", any(handlers::dispatch_beers))
        .route("/beers/*id", any(handlers::dispatch_beers))
}
