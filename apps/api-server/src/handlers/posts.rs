//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_shared::ErrorResponse;
use blog_shared::dto::{PageResponse, PostListQuery, PostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// Get all posts with pagination and sorting.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    params(PostListQuery),
    responses(
        (status = 200, description = "One page of posts", body = PageResponse<PostResponse>),
        (status = 400, description = "Unknown sort or page out of range", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let request = validation::page_request(query.into_inner())?;
    tracing::info!(
        page = request.page,
        size = request.size,
        "REST request to get a page of posts"
    );

    let page = state.posts.list_posts(&request).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Get post by ID.
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "No such post", body = ErrorResponse)
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(post_id = id, "REST request to get post");

    let post = state.posts.get_post(id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Create new post.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such category", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let input = validation::post_input(body.into_inner())?;
    tracing::info!(
        title = %input.title,
        category_id = input.category_id,
        "REST request to save post"
    );

    let post = state.posts.create_post(input).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Update post.
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such post or category", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = validation::post_input(body.into_inner())?;
    tracing::info!(post_id = id, "REST request to update post");

    let post = state.posts.update_post(id, input).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete post.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "No such post", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(post_id = id, "REST request to delete post");

    state.posts.delete_post(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Get posts by category.
#[utoipa::path(
    get,
    path = "/api/posts/category/{category_id}",
    tag = "Posts",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Posts in the category", body = Vec<PostResponse>),
        (status = 404, description = "No such category", body = ErrorResponse)
    )
)]
pub async fn list_posts_by_category(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let category_id = path.into_inner();
    tracing::info!(category_id, "REST request to get posts by category");

    let posts = state.posts.list_posts_by_category(category_id).await?;
    Ok(HttpResponse::Ok().json(posts))
}
