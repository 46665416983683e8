use std::sync::Arc;

use blog_shared::dto::CommentResponse;

use super::missing_as;
use crate::domain::{CommentInput, NewComment};
use crate::error::{DomainError, DomainResult};
use crate::ports::{CommentRepository, PostRepository};

/// Comment use cases.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { comments, posts }
    }

    pub async fn list_comments(&self, post_id: i64) -> DomainResult<Vec<CommentResponse>> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::post_not_found(post_id));
        }

        let comments = self.comments.find_by_post_id(post_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn get_comment(&self, id: i64) -> DomainResult<CommentResponse> {
        self.comments
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| DomainError::comment_not_found(id))
    }

    pub async fn add_comment(
        &self,
        post_id: i64,
        input: CommentInput,
    ) -> DomainResult<CommentResponse> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::post_not_found(post_id));
        }

        let comment = self
            .comments
            .insert(NewComment::new(post_id, input))
            .await?;
        tracing::debug!(comment_id = comment.id, post_id, "Comment added");
        Ok(comment.into())
    }

    pub async fn update_comment(
        &self,
        id: i64,
        input: CommentInput,
    ) -> DomainResult<CommentResponse> {
        let mut comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))?;

        comment.apply(input);

        let updated = self
            .comments
            .update(comment)
            .await
            .map_err(|e| missing_as(e, DomainError::comment_not_found(id)))?;
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, id: i64) -> DomainResult<()> {
        self.comments
            .delete(id)
            .await
            .map_err(|e| missing_as(e, DomainError::comment_not_found(id)))?;
        tracing::debug!(comment_id = id, "Comment deleted");
        Ok(())
    }
}
