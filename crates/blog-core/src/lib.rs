//! # Blog Core
//!
//! The domain layer of the blog API: entities, repository ports, pagination
//! rules, entity-to-DTO mapping and the services that orchestrate them.
//! Nothing here knows which store backs the ports.

pub mod domain;
pub mod error;
pub mod mapping;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use pagination::{PageRequest, PostSort, PostSortField, SortDirection};
pub use services::{CategoryService, CommentService, PostService};
