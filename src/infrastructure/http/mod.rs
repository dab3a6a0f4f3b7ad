//! HTTP Layer
//!
//! Single-resource REST surface:
//! - /beers      GET list, POST create
//! - /beers/{id} GET one (identifier taken verbatim from the path)
//! - /ping       GET health check

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::DispatchError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
