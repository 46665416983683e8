//! Domain entities - the core business objects.

mod category;
mod comment;
mod post;

pub use category::{Category, CategoryInput};
pub use comment::{Comment, CommentInput, NewComment};
pub use post::{NewPost, Post, PostInput, PostWithCategory};
