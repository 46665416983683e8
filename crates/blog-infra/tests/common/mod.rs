//! Helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use blog_core::ports::{CategoryRepository, CommentRepository, PostRepository};
use blog_core::{CategoryService, CommentService, PostService};
use blog_infra::InMemoryBlogStore;
use blog_infra::database::{SeaCategoryRepository, SeaCommentRepository, SeaPostRepository};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DbConn};

/// Fresh in-memory SQLite database with the blog schema applied.
pub async fn sqlite_db() -> Arc<DbConn> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open SQLite database");
    Migrator::up(&db, None).await.expect("Migrations failed");
    Arc::new(db)
}

/// The three services wired against one set of repositories.
pub struct Services {
    pub categories: CategoryService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl Services {
    pub fn wire(
        categories: Arc<dyn CategoryRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            categories: CategoryService::new(categories.clone()),
            posts: PostService::new(posts.clone(), categories),
            comments: CommentService::new(comments, posts),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryBlogStore::new());
        Self::wire(store.clone(), store.clone(), store)
    }

    pub async fn sqlite() -> Self {
        let db = sqlite_db().await;
        Self::wire(
            Arc::new(SeaCategoryRepository::new(db.clone())),
            Arc::new(SeaPostRepository::new(db.clone())),
            Arc::new(SeaCommentRepository::new(db)),
        )
    }
}
