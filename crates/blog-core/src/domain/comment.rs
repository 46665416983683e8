use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - a reader's reply attached to one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for adding or overwriting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInput {
    pub content: String,
    pub author: String,
}

/// Data required to insert a new [`Comment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(post_id: i64, input: CommentInput) -> Self {
        Self {
            post_id,
            content: input.content,
            author: input.author,
            created_at: Utc::now(),
        }
    }
}

impl Comment {
    /// Overwrite content and author; `created_at` is untouched.
    pub fn apply(&mut self, input: CommentInput) {
        self.content = input.content;
        self.author = input.author;
    }
}
