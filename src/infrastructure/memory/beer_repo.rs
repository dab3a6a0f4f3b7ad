//! In-Memory Beer Repository

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{BeerRepository, RepositoryError};
use crate::domain::Beer;

/// Fixture variant of the repository port. Assigns ids and timestamps the
/// same way the SQLite implementation does.
pub struct InMemoryBeerRepository {
    beers: RwLock<Vec<Beer>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self {
            beers: RwLock::new(Vec::new()),
        }
    }

    /// Pre-populated repository for tests.
    pub fn with_beers(beers: Vec<Beer>) -> Self {
        Self {
            beers: RwLock::new(beers),
        }
    }
}

impl Default for InMemoryBeerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        Ok(self.beers.read().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Beer, RepositoryError> {
        self.beers
            .read()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("beer {}", id)))
    }

    async fn create(&self, name: &str, country_iso: &str) -> Result<Beer, RepositoryError> {
        let beer = Beer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            country_iso: country_iso.to_string(),
            created_at: Utc::now(),
        };
        self.beers.write().unwrap().push(beer.clone());
        Ok(beer)
    }
}
