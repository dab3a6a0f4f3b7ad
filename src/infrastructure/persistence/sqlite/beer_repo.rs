//! SQLite Beer Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{BeerRepository, RepositoryError};
use crate::domain::Beer;

/// Store-backed repository variant.
pub struct SqliteBeerRepository {
    pool: DbPool,
}

impl SqliteBeerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BeerRow {
    id: String,
    name: String,
    country_iso: String,
    created_at: String,
}

impl TryFrom<BeerRow> for Beer {
    type Error = RepositoryError;

    fn try_from(row: BeerRow) -> Result<Self, Self::Error> {
        Ok(Beer {
            id: row.id,
            name: row.name,
            country_iso: row.country_iso,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::Serialization(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl BeerRepository for SqliteBeerRepository {
    async fn find_all(&self) -> Result<Vec<Beer>, RepositoryError> {
        let rows: Vec<BeerRow> = sqlx::query_as(
            "SELECT id, name, country_iso, created_at FROM beers ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(Beer::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Beer, RepositoryError> {
        let row: Option<BeerRow> =
            sqlx::query_as("SELECT id, name, country_iso, created_at FROM beers WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Beer::try_from)
            .transpose()?
            .ok_or_else(|| RepositoryError::NotFound(format!("beer {}", id)))
    }

    async fn create(&self, name: &str, country_iso: &str) -> Result<Beer, RepositoryError> {
        let beer = Beer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            country_iso: country_iso.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO beers (id, name, country_iso, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&beer.id)
        .bind(&beer.name)
        .bind(&beer.country_iso)
        .bind(beer.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(beer)
    }
}
