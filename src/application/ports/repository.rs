//! Repository Port
//!
//! Persistence abstraction for the Beer catalog. Concrete implementations
//! live in the infrastructure layer (SQLite for production, in-memory for
//! tests).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Beer;

/// Repository errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Beer Repository Port
///
/// The repository assigns identity and creation time; callers never supply
/// either. `find_by_id` decides what constitutes "not found".
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// All beers in the catalog.
    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError>;

    /// One beer by its opaque identifier.
    async fn find_by_id(&self, id: &str) -> Result<Beer, RepositoryError>;

    /// Persist a new beer, assigning id and timestamp.
    async fn create(&self, name: &str, country_iso: &str) -> Result<Beer, RepositoryError>;
}
