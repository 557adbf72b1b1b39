//! # Taskboard Shared Library
//!
//! Types and database access shared by the Taskboard API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Users, tags and tasks with their SQL
//! - `auth`: Password hashing, JWT tokens and bearer-header parsing
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
