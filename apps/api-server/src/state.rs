//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{CategoryRepository, CommentRepository, PostRepository};
use blog_core::{CategoryService, CommentService, PostService};
use blog_infra::InMemoryBlogStore;
use blog_infra::database::{
    DatabaseConfig, DatabaseConnections, SeaCategoryRepository, SeaCommentRepository,
    SeaPostRepository,
};
use migration::{DbErr, Migrator, MigratorTrait};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let state = match db_config {
            Some(config) => match Self::connect(config).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by SeaORM repositories over one connection pool.
    async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connections = DatabaseConnections::init(config).await?;

        if config.run_migrations {
            Migrator::up(&*connections.main, None).await?;
            tracing::info!("Database migrations applied");
        }

        let conn = Arc::new(connections);
        let categories = Arc::new(SeaCategoryRepository::new(conn.main.clone()));
        let posts = Arc::new(SeaPostRepository::new(conn.main.clone()));
        let comments = Arc::new(SeaCommentRepository::new(conn.main.clone()));

        Ok(Self::wire(categories, posts, comments, Some(conn)))
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryBlogStore::new());
        Self::wire(store.clone(), store.clone(), store, None)
    }

    /// Hand each service the repositories it needs.
    pub fn wire(
        categories: Arc<dyn CategoryRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        db: Option<Arc<DatabaseConnections>>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(categories.clone())),
            posts: Arc::new(PostService::new(posts.clone(), categories)),
            comments: Arc::new(CommentService::new(comments, posts)),
            db,
        }
    }
}
