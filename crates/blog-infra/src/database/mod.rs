//! SeaORM persistence: connection management, entities and repositories.

mod connections;
mod sea_base;
mod sea_repo;

pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use sea_base::SeaBaseRepository;
pub use sea_repo::{SeaCategoryRepository, SeaCommentRepository, SeaPostRepository};
