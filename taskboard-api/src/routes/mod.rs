/// API route handlers, one module per resource
///
/// - `health`: Liveness and database connectivity
/// - `auth`: Sign-in
/// - `users`: Registration, lookup and account deletion
/// - `tags`: Tag creation and listing
/// - `tasks`: The caller's tasks

pub mod auth;
pub mod health;
pub mod tags;
pub mod tasks;
pub mod users;
