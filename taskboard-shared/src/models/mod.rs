/// Database models
///
/// Each model exposes associated async functions that take any
/// `sqlx::PgExecutor`, so the same call works against the pool or inside a
/// transaction.
///
/// # Models
///
/// - `user`: Accounts with unique username and email
/// - `tag`: Globally unique labels
/// - `task`: Work items owned by a user and labelled with a tag
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::{tag::Tag, user::{CreateUser, User}};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let mut tx = pool.begin().await?;
/// if !User::username_exists(&mut *tx, "sampleuser").await? {
///     User::create(&mut *tx, CreateUser {
///         username: "sampleuser".to_string(),
///         email: "sample@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///     }).await?;
/// }
/// tx.commit().await?;
///
/// let tags = Tag::list(&pool).await?;
/// # Ok(())
/// # }
/// ```

pub mod tag;
pub mod task;
pub mod user;
