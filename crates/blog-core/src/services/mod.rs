//! Domain services - orchestrate repository calls, enforce existence checks
//! and map results to response shapes.

mod category;
mod comment;
mod post;

pub use category::CategoryService;
pub use comment::CommentService;
pub use post::PostService;

use crate::error::{DomainError, RepoError};

/// A row that disappeared between lookup and write reads as `not_found`.
fn missing_as(err: RepoError, not_found: DomainError) -> DomainError {
    match err {
        RepoError::NotFound => not_found,
        other => other.into(),
    }
}
