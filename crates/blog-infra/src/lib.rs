//! # Blog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blog-core`:
//!
//! - [`database`] - SeaORM entities and repositories (PostgreSQL in
//!   production, SQLite in tests).
//! - [`memory`] - an in-process store used when no database is configured.

pub mod database;
pub mod memory;

pub use database::DatabaseConnections;
pub use memory::InMemoryBlogStore;
