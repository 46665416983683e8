use std::sync::Arc;

use blog_shared::dto::{PageResponse, PostResponse};

use super::missing_as;
use crate::domain::{NewPost, PostInput, PostWithCategory};
use crate::error::{DomainError, DomainResult};
use crate::mapping::to_page;
use crate::pagination::PageRequest;
use crate::ports::{CategoryRepository, PostRepository};

/// Post use cases. Every post handed back carries its category name.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    pub async fn list_posts(
        &self,
        request: &PageRequest,
    ) -> DomainResult<PageResponse<PostResponse>> {
        let (total, rows) = self.posts.find_page(request).await?;
        Ok(to_page(request, total, rows))
    }

    pub async fn get_post(&self, id: i64) -> DomainResult<PostResponse> {
        self.posts
            .find_with_category(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn create_post(&self, input: PostInput) -> DomainResult<PostResponse> {
        let category = self
            .categories
            .find_by_id(input.category_id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(input.category_id))?;

        let post = self.posts.insert(NewPost::new(input)).await?;
        tracing::debug!(post_id = post.id, category_id = category.id, "Post created");

        Ok(PostWithCategory { post, category }.into())
    }

    /// The category is only looked up again when the request moves the post
    /// to a different one.
    pub async fn update_post(&self, id: i64, input: PostInput) -> DomainResult<PostResponse> {
        let PostWithCategory {
            mut post,
            mut category,
        } = self
            .posts
            .find_with_category(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        let target = input.category_id;
        if post.category_id != target {
            category = self
                .categories
                .find_by_id(target)
                .await?
                .ok_or_else(|| DomainError::category_not_found(target))?;
            post.category_id = category.id;
        }

        post.apply(input);

        let post = self
            .posts
            .update(post)
            .await
            .map_err(|e| missing_as(e, DomainError::post_not_found(id)))?;
        Ok(PostWithCategory { post, category }.into())
    }

    /// Removes the post together with its comments.
    pub async fn delete_post(&self, id: i64) -> DomainResult<()> {
        self.posts
            .delete(id)
            .await
            .map_err(|e| missing_as(e, DomainError::post_not_found(id)))?;
        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }

    pub async fn list_posts_by_category(
        &self,
        category_id: i64,
    ) -> DomainResult<Vec<PostResponse>> {
        if !self.categories.exists(category_id).await? {
            return Err(DomainError::category_not_found(category_id));
        }

        let rows = self.posts.find_by_category_id(category_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
