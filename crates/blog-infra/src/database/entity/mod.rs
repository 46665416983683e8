//! SeaORM entities for the `categories`, `posts` and `comments` tables.

pub mod category;
pub mod comment;
pub mod post;
