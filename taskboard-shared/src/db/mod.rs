/// Database plumbing
///
/// - `pool`: PostgreSQL connection pool construction and health checks
/// - `migrations`: Embedded schema migrations
///
/// Models live in the crate-level `models` module.

pub mod migrations;
pub mod pool;
