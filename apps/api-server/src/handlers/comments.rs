//! Comment handlers.

use actix_web::{HttpResponse, web};

use blog_shared::ErrorResponse;
use blog_shared::dto::{CommentRequest, CommentResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// Get comments for post.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<CommentResponse>),
        (status = 404, description = "No such post", body = ErrorResponse)
    )
)]
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    tracing::info!(post_id, "REST request to get comments by post");

    let comments = state.comments.list_comments(post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Add comment to post.
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse)
    )
)]
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let input = validation::comment_input(body.into_inner())?;
    tracing::info!(post_id, author = %input.author, "REST request to add comment");

    let comment = state.comments.add_comment(post_id, input).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// Get comment by ID.
#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = "Comments",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The comment", body = CommentResponse),
        (status = 404, description = "No such comment", body = ErrorResponse)
    )
)]
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(comment_id = id, "REST request to get comment");

    let comment = state.comments.get_comment(id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Update comment.
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = "Comments",
    params(("id" = i64, Path, description = "Comment id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such comment", body = ErrorResponse)
    )
)]
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = validation::comment_input(body.into_inner())?;
    tracing::info!(comment_id = id, "REST request to update comment");

    let comment = state.comments.update_comment(id, input).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Delete comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = "Comments",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "No such comment", body = ErrorResponse)
    )
)]
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(comment_id = id, "REST request to delete comment");

    state.comments.delete_comment(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
