/// Tag model and database operations
///
/// Tags are global (not owned by a user) and every task references exactly one.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tags (
///     id BIGSERIAL PRIMARY KEY,
///     name VARCHAR(80) NOT NULL,
///     CONSTRAINT tags_name_key UNIQUE (name)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// Unique constraint on `tags.name`
pub const NAME_CONSTRAINT: &str = "tags_name_key";

/// Maximum number of tags returned by [`Tag::list`]
pub const PAGE_SIZE: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,

    /// Unique across all tags
    pub name: String,
}

impl Tag {
    pub async fn create<'e, E>(executor: E, name: &str) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Returns the first [`PAGE_SIZE`] tags in insertion order
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id ASC LIMIT $1")
            .bind(PAGE_SIZE)
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn name_exists<'e, E>(executor: E, name: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM tags WHERE name = $1)")
            .bind(name)
            .fetch_one(executor)
            .await
    }

    /// Deletes a tag and every task that references it
    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
