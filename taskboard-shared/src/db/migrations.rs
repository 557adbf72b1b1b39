/// Schema migrations
///
/// The SQL files in the workspace `migrations/` directory are embedded at
/// compile time with `sqlx::migrate!` and applied in version order:
///
/// 1. `users` with unique `username` and `email`
/// 2. `tags` with unique `name`
/// 3. `task_status` enum and `tasks`, whose `user_id` and `tag_id` foreign
///    keys cascade on delete

use sqlx::{migrate::Migrator, postgres::PgPool};
use tracing::{info, warn};

/// Embedded migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Applies all pending migrations
///
/// Safe to call from several processes at once; Postgres migrations take an
/// advisory lock.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    match MIGRATOR.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
