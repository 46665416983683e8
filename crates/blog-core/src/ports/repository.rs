use async_trait::async_trait;

use crate::domain::{
    Category, CategoryInput, Comment, NewComment, NewPost, Post, PostWithCategory,
};
use crate::error::RepoError;
use crate::pagination::PageRequest;

/// Generic repository trait defining the lookups every entity shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Whether an entity with this ID exists.
    async fn exists(&self, id: ID) -> Result<bool, RepoError>;

    /// Delete an entity by its ID, cascading to its dependents.
    ///
    /// Returns [`RepoError::NotFound`] when nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, i64> {
    /// All categories in insertion order.
    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;

    /// Insert a category and return it with its generated id.
    async fn insert(&self, category: CategoryInput) -> Result<Category, RepoError>;

    /// Overwrite an existing category. [`RepoError::NotFound`] if it vanished.
    async fn update(&self, category: Category) -> Result<Category, RepoError>;
}

/// Post repository. Reads that feed responses return the post joined with
/// its category in the same query.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    async fn find_with_category(&self, id: i64) -> Result<Option<PostWithCategory>, RepoError>;

    /// One page of posts plus the total number of posts.
    async fn find_page(
        &self,
        request: &PageRequest,
    ) -> Result<(u64, Vec<PostWithCategory>), RepoError>;

    /// All posts in a category, in insertion order.
    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<PostWithCategory>, RepoError>;

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite an existing post. [`RepoError::NotFound`] if it vanished.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    /// All comments on a post, in insertion order.
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;

    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// Overwrite an existing comment. [`RepoError::NotFound`] if it vanished.
    async fn update(&self, comment: Comment) -> Result<Comment, RepoError>;
}
