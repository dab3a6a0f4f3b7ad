//! Beer Service
//!
//! Pass-through façade over the repository port. Adds no caching,
//! validation, or transformation; errors flow through unchanged. It exists
//! as the seam between the HTTP dispatcher and whatever repository
//! implementation was injected at startup.

use std::sync::Arc;

use crate::application::ports::{BeerRepository, RepositoryError};
use crate::domain::Beer;

/// Stateless service delegating to the repository.
pub struct BeerService {
    repository: Arc<dyn BeerRepository>,
}

impl BeerService {
    pub fn new(repository: Arc<dyn BeerRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Beer, RepositoryError> {
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, name: &str, country_iso: &str) -> Result<Beer, RepositoryError> {
        self.repository.create(name, country_iso).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryBeerRepository;

    #[tokio::test]
    async fn test_service_delegates_verbatim() {
        let repo = Arc::new(InMemoryBeerRepository::new());
        let service = BeerService::new(repo.clone());

        let created = service.create("Punk IPA", "uk").await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = service.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_not_found_passes_through_unchanged() {
        let service = BeerService::new(Arc::new(InMemoryBeerRepository::new()));

        let err = service.get_by_id("missing").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
