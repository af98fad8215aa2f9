//! Handlers for the `/communities` resource.
//!
//! Each handler turns request data into a DTO, hands it to the community
//! repository and renders the resulting entity as JSON. Lookups that find
//! nothing render `null` with a 200 status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use communities_core::community::{CreateDto, IdDto, ReadDto, UpdateDto};
use communities_core::types::DbId;
use communities_db::models::community::CommunityEntity;
use communities_db::repositories::Repository;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct CommunityParams {
    pub title: String,
    pub description: String,
}

/// GET /api/communities
///
/// Accepts repeated `titles[]` query keys; with none, lists every community.
pub async fn index(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<CommunityEntity>>> {
    let dto = ReadDto::from_query_pairs(pairs);
    let entities = state.communities.read(&dto).await?;
    Ok(Json(entities))
}

/// GET /api/communities/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<CommunityEntity>>> {
    let entity = state.communities.find(&IdDto::new(id)).await?;
    Ok(Json(entity))
}

/// POST /api/communities
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CommunityParams>,
) -> AppResult<(StatusCode, Json<CommunityEntity>)> {
    let dto = CreateDto::new(input.title, input.description)?;
    let entity = state.communities.create(&dto).await?;

    tracing::info!(community_id = entity.id(), "Community created");

    Ok((StatusCode::CREATED, Json(entity)))
}

/// PATCH|PUT /api/communities/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CommunityParams>,
) -> AppResult<Json<Option<CommunityEntity>>> {
    let dto = UpdateDto::new(id, input.title, input.description)?;
    let entity = state.communities.update(&dto).await?;

    if entity.is_some() {
        tracing::info!(community_id = id, "Community updated");
    }

    Ok(Json(entity))
}

/// DELETE /api/communities/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<CommunityEntity>>> {
    let entity = state.communities.destroy(&IdDto::new(id)).await?;

    if entity.is_some() {
        tracing::info!(community_id = id, "Community deleted");
    }

    Ok(Json(entity))
}
