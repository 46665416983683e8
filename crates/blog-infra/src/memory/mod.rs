//! In-memory blog store - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{
    Category, CategoryInput, Comment, NewComment, NewPost, Post, PostWithCategory,
};
use blog_core::error::RepoError;
use blog_core::pagination::PageRequest;
use blog_core::ports::{BaseRepository, CategoryRepository, CommentRepository, PostRepository};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    posts: BTreeMap<i64, Post>,
    comments: BTreeMap<i64, Comment>,
    last_category_id: i64,
    last_post_id: i64,
    last_comment_id: i64,
}

impl Tables {
    fn join(&self, post: &Post) -> Result<PostWithCategory, RepoError> {
        let category = self.categories.get(&post.category_id).ok_or_else(|| {
            RepoError::Constraint(format!(
                "post {} references missing category {}",
                post.id, post.category_id
            ))
        })?;

        Ok(PostWithCategory {
            post: post.clone(),
            category: category.clone(),
        })
    }

    fn require_category(&self, id: i64) -> Result<(), RepoError> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!(
                "category {id} does not exist"
            )))
        }
    }

    fn require_post(&self, id: i64) -> Result<(), RepoError> {
        if self.posts.contains_key(&id) {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!("post {id} does not exist")))
        }
    }

    fn remove_post(&mut self, id: i64) -> bool {
        if self.posts.remove(&id).is_none() {
            return false;
        }
        self.comments.retain(|_, c| c.post_id != id);
        true
    }
}

fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}

/// Blog store held in process memory behind one async `RwLock`.
///
/// Implements all three repository ports with the same foreign-key rules as
/// the SQL schema: inserts and updates must reference an existing parent, and
/// deletes cascade to dependents. Ids start at 1 and are never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogStore {
    tables: RwLock<Tables>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Category, i64> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepoError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.tables.read().await.categories.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.categories.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let orphaned: Vec<i64> = tables
            .posts
            .values()
            .filter(|p| p.category_id == id)
            .map(|p| p.id)
            .collect();
        for post_id in orphaned {
            tables.remove_post(post_id);
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBlogStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn insert(&self, input: CategoryInput) -> Result<Category, RepoError> {
        let mut tables = self.tables.write().await;
        let category = Category {
            id: next_id(&mut tables.last_category_id),
            name: input.name,
            description: input.description,
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, RepoError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .categories
            .get_mut(&category.id)
            .ok_or(RepoError::NotFound)?;
        *slot = category.clone();
        Ok(category)
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.tables.read().await.posts.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        if self.tables.write().await.remove_post(id) {
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn find_with_category(&self, id: i64) -> Result<Option<PostWithCategory>, RepoError> {
        let tables = self.tables.read().await;
        tables.posts.get(&id).map(|p| tables.join(p)).transpose()
    }

    async fn find_page(
        &self,
        request: &PageRequest,
    ) -> Result<(u64, Vec<PostWithCategory>), RepoError> {
        let tables = self.tables.read().await;

        let mut posts: Vec<&Post> = tables.posts.values().collect();
        posts.sort_by(|a, b| request.sort.compare(a, b));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let items = posts
            .into_iter()
            .skip(offset)
            .take(size)
            .map(|p| tables.join(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((tables.posts.len() as u64, items))
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<PostWithCategory>, RepoError> {
        let tables = self.tables.read().await;
        tables
            .posts
            .values()
            .filter(|p| p.category_id == category_id)
            .map(|p| tables.join(p))
            .collect()
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_category(post.category_id)?;

        let post = Post {
            id: next_id(&mut tables.last_post_id),
            title: post.title,
            content: post.content,
            author: post.author,
            category_id: post.category_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_category(post.category_id)?;

        let slot = tables.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;
        *slot = post.clone();
        Ok(post)
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        Ok(self.tables.read().await.comments.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.tables.read().await.comments.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        match self.tables.write().await.comments.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogStore {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_post(comment.post_id)?;

        let comment = Comment {
            id: next_id(&mut tables.last_comment_id),
            post_id: comment.post_id,
            content: comment.content,
            author: comment.author,
            created_at: comment.created_at,
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_post(comment.post_id)?;

        let slot = tables
            .comments
            .get_mut(&comment.id)
            .ok_or(RepoError::NotFound)?;
        *slot = comment.clone();
        Ok(comment)
    }
}
