//! Repository for the `communities` table.

use async_trait::async_trait;
use communities_core::community::{CreateDto, IdDto, ReadDto, UpdateDto};
use sqlx::PgPool;

use crate::error::RepositoryResult;
use crate::models::community::{Community, CommunityEntity};
use crate::repositories::Repository;

/// Column list for communities queries.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Provides CRUD operations for communities.
///
/// Holds only a pool handle; every call checks out its own connection.
#[derive(Debug, Clone)]
pub struct CommunityRepo {
    pool: PgPool,
}

impl CommunityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for CommunityRepo {
    type Entity = CommunityEntity;
    type ReadDto = ReadDto;
    type CreateDto = CreateDto;
    type UpdateDto = UpdateDto;

    /// List communities, optionally keeping only those whose title contains
    /// any of the requested strings. Ordered by id.
    async fn read(&self, dto: &ReadDto) -> RepositoryResult<Vec<CommunityEntity>> {
        let rows = match dto.title_patterns() {
            None => {
                let query = format!("SELECT {COLUMNS} FROM communities ORDER BY id ASC");
                sqlx::query_as::<_, Community>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(patterns) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM communities \
                     WHERE title LIKE ANY($1) \
                     ORDER BY id ASC"
                );
                sqlx::query_as::<_, Community>(&query)
                    .bind(&patterns)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(CommunityEntity::from).collect())
    }

    async fn find(&self, dto: &IdDto) -> RepositoryResult<Option<CommunityEntity>> {
        let query = format!("SELECT {COLUMNS} FROM communities WHERE id = $1");
        let row = sqlx::query_as::<_, Community>(&query)
            .bind(dto.id())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(CommunityEntity::from))
    }

    async fn create(&self, dto: &CreateDto) -> RepositoryResult<CommunityEntity> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO communities (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Community>(&query)
            .bind(dto.title())
            .bind(dto.description())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(community_id = row.id, "Community inserted");
        Ok(row.into())
    }

    async fn update(&self, dto: &UpdateDto) -> RepositoryResult<Option<CommunityEntity>> {
        let mut tx = self.pool.begin().await?;

        let query = format!(
            "UPDATE communities SET
                title = $2,
                description = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Community>(&query)
            .bind(dto.id())
            .bind(dto.title())
            .bind(dto.description())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.map(CommunityEntity::from))
    }

    async fn destroy(&self, dto: &IdDto) -> RepositoryResult<Option<CommunityEntity>> {
        let mut tx = self.pool.begin().await?;

        let query = format!("DELETE FROM communities WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, Community>(&query)
            .bind(dto.id())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.map(CommunityEntity::from))
    }
}
