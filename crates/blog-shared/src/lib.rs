//! # Blog Shared
//!
//! Wire types exchanged with API clients: request bodies, response shapes,
//! the page envelope and the problem-details error body.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, FieldError};
