/// Task model and database operations
///
/// A task belongs to exactly one user and references exactly one tag. Both
/// foreign keys are mandatory and cascade on delete, so removing the user or
/// the tag removes the task.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('PENDING', 'IN_PROGRESS', 'COMPLETED');
///
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     content TEXT NOT NULL,
///     status task_status NOT NULL DEFAULT 'PENDING',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     user_id BIGINT NOT NULL,
///     tag_id BIGINT NOT NULL,
///     CONSTRAINT tasks_user_id_fkey FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
///     CONSTRAINT tasks_tag_id_fkey FOREIGN KEY (tag_id) REFERENCES tags(id) ON DELETE CASCADE
/// );
/// ```
///
/// Lookups that take a `user_id` treat tasks owned by someone else as absent.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{CreateTask, Task, TaskStatus};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool, user_id: i64, tag_id: i64) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, CreateTask {
///     title: "Write report".to_string(),
///     content: "Quarterly numbers".to_string(),
///     status: TaskStatus::default(),
///     user_id,
///     tag_id,
/// }).await?;
/// assert_eq!(task.status, TaskStatus::Pending);
///
/// let mine = Task::list_by_user(&pool, user_id).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// Foreign key from `tasks.user_id` to `users.id`
pub const USER_CONSTRAINT: &str = "tasks_user_id_fkey";

/// Foreign key from `tasks.tag_id` to `tags.id`
pub const TAG_CONSTRAINT: &str = "tasks_tag_id_fkey";

/// Progress of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// A task row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: TaskStatus,

    /// Set by the database on insert
    pub created_at: DateTime<Utc>,

    /// Owner
    pub user_id: i64,

    pub tag_id: i64,
}

/// A task joined with its tag's name, as listed for its owner
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithTag {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub tag_id: i64,
    pub tag_name: String,
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub title: String,
    pub content: String,
    pub status: TaskStatus,
    pub user_id: i64,
    pub tag_id: i64,
}

/// Replacement values for an existing task
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub title: String,
    pub content: String,
    pub status: TaskStatus,
}

impl Task {
    /// Inserts a task
    ///
    /// # Errors
    ///
    /// A `user_id` or `tag_id` with no matching row surfaces as a foreign-key
    /// violation (SQLSTATE 23503).
    pub async fn create<'e, E>(executor: E, data: CreateTask) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, content, status, user_id, tag_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, status, created_at, user_id, tag_id
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.status)
        .bind(data.user_id)
        .bind(data.tag_id)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, status, created_at, user_id, tag_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Lists a user's tasks with tag names, oldest first
    pub async fn list_by_user<'e, E>(executor: E, user_id: i64) -> Result<Vec<TaskWithTag>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, TaskWithTag>(
            r#"
            SELECT t.id, t.title, t.content, t.status, t.created_at, t.user_id, t.tag_id,
                   g.name AS tag_name
            FROM tasks t
            JOIN tags g ON g.id = t.tag_id
            WHERE t.user_id = $1
            ORDER BY t.created_at ASC, t.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Lists every task referencing a tag
    pub async fn list_by_tag<'e, E>(executor: E, tag_id: i64) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, content, status, created_at, user_id, tag_id
            FROM tasks
            WHERE tag_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(tag_id)
        .fetch_all(executor)
        .await
    }

    /// Overwrites title, content and status of a task owned by `user_id`
    ///
    /// Returns None if the task does not exist or belongs to another user.
    pub async fn update_for_user<'e, E>(
        executor: E,
        id: i64,
        user_id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $3, content = $4, status = $5
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, content, status, created_at, user_id, tag_id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(data.title)
        .bind(data.content)
        .bind(data.status)
        .fetch_optional(executor)
        .await
    }

    /// Deletes a task owned by `user_id`; false if there was none
    pub async fn delete_for_user<'e, E>(executor: E, id: i64, user_id: i64) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
