use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Post entity - a blog article filed under exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post loaded together with its category in one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithCategory {
    pub post: Post,
    pub category: Category,
}

/// Validated fields for creating or overwriting a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category_id: i64,
}

/// Data required to insert a new [`Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Stamp a new post with the current time for both timestamps.
    pub fn new(input: PostInput) -> Self {
        let now = Utc::now();
        Self {
            title: input.title,
            content: input.content,
            author: input.author,
            category_id: input.category_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Post {
    /// Overwrite the scalar fields and move `updated_at` forward.
    ///
    /// The category link is left alone; the caller decides whether it moves.
    pub fn apply(&mut self, input: PostInput) {
        self.title = input.title;
        self.content = input.content;
        self.author = input.author;
        self.touch();
    }

    /// `updated_at` never goes backwards, even if the wall clock does.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
