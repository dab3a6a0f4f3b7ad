//! Application Ports
//!
//! Abstract interfaces between the application and infrastructure layers.

mod repository;

pub use repository::{BeerRepository, RepositoryError};
