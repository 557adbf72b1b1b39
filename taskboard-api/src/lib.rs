//! # Taskboard API Server Library
//!
//! HTTP layer of the taskboard service: users sign in with a JWT, organize
//! tasks under shared tags, and manage only their own tasks.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Validating JSON extractor
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
