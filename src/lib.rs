//! Taproom - single-resource beer catalog service
//!
//! Layered layout:
//!
//! Domain (domain/):
//! - Beer entity and its wire JSON shape
//!
//! Application (application/):
//! - Ports: BeerRepository abstraction
//! - BeerService: pass-through façade over the repository port
//!
//! Infrastructure (infrastructure/):
//! - HTTP: axum server, method dispatcher for `/beers`, error mapping
//! - Persistence: SQLite repository implementation
//! - Memory: in-memory repository (test fixture)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
