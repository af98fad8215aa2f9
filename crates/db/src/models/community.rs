//! Community row model and its outbound entity.

use communities_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `communities` table.
#[derive(Debug, Clone, FromRow)]
pub struct Community {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read-model value returned to callers.
///
/// Only obtainable by converting a [`Community`] row, so every entity
/// reflects a row as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityEntity {
    id: DbId,
    title: String,
    description: String,
}

impl CommunityEntity {
    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<Community> for CommunityEntity {
    fn from(row: Community) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

impl From<&Community> for CommunityEntity {
    fn from(row: &Community) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            description: row.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Community {
        let now = chrono::Utc::now();
        Community {
            id: 42,
            title: "Book Club".to_string(),
            description: "A place for bookworms".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn entity_copies_row_fields() {
        let entity = CommunityEntity::from(row());
        assert_eq!(entity.id(), 42);
        assert_eq!(entity.title(), "Book Club");
        assert_eq!(entity.description(), "A place for bookworms");
    }

    #[test]
    fn borrowed_and_owned_conversions_agree() {
        let row = row();
        assert_eq!(CommunityEntity::from(&row), CommunityEntity::from(row));
    }

    #[test]
    fn entity_serializes_without_timestamps() {
        let json = serde_json::to_value(CommunityEntity::from(row())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "title": "Book Club",
                "description": "A place for bookworms",
            })
        );
    }
}
