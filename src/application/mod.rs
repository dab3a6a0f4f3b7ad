//! Application Layer
//!
//! - ports: repository abstraction consumed by the service
//! - service: the BeerService façade the HTTP dispatcher calls into

pub mod ports;
pub mod service;

pub use ports::{BeerRepository, RepositoryError};
pub use service::BeerService;
