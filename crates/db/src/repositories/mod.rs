//! Repository layer.
//!
//! A repository is the only component that reads or writes the store. Each
//! one implements [`Repository`] over its own entity and DTO types; handlers
//! depend on the trait, not on SQL.

use async_trait::async_trait;
use communities_core::community::IdDto;

use crate::error::RepositoryResult;

pub mod community_repo;

pub use community_repo::CommunityRepo;

/// CRUD capability over a single entity type.
///
/// Lookups that find nothing return `Ok(None)`; errors are reserved for
/// validation and store failures.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Send;
    type ReadDto: Send + Sync;
    type CreateDto: Send + Sync;
    type UpdateDto: Send + Sync;

    /// List entities matching the read filter.
    async fn read(&self, dto: &Self::ReadDto) -> RepositoryResult<Vec<Self::Entity>>;

    async fn find(&self, dto: &IdDto) -> RepositoryResult<Option<Self::Entity>>;

    /// Persist a new entity and return it with its generated id.
    async fn create(&self, dto: &Self::CreateDto) -> RepositoryResult<Self::Entity>;

    /// Overwrite an existing entity. `None` if it does not exist.
    async fn update(&self, dto: &Self::UpdateDto) -> RepositoryResult<Option<Self::Entity>>;

    /// Delete an entity, returning its last known state. `None` if it does not exist.
    async fn destroy(&self, dto: &IdDto) -> RepositoryResult<Option<Self::Entity>>;
}
