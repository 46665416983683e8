//! OpenAPI document for the blog API.

use actix_web::HttpResponse;
use utoipa::OpenApi;

use blog_shared::dto::{
    CategoryRequest, CategoryResponse, CommentRequest, CommentResponse, PostRequest, PostResponse,
};
use blog_shared::{ErrorResponse, FieldError};

use super::{categories, comments, health, posts};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Management REST API",
        version = "v1.0.0",
        description = "RESTful API for a blog management system"
    ),
    paths(
        health::health_check,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        posts::list_posts_by_category,
        comments::list_comments,
        comments::add_comment,
        comments::get_comment,
        comments::update_comment,
        comments::delete_comment,
    ),
    components(schemas(
        CategoryRequest,
        CategoryResponse,
        PostRequest,
        PostResponse,
        CommentRequest,
        CommentResponse,
        ErrorResponse,
        FieldError,
        health::HealthResponse,
    )),
    tags(
        (name = "Categories", description = "Blog Category Management APIs"),
        (name = "Posts", description = "Blog Post Management APIs"),
        (name = "Comments", description = "Blog Comment Management APIs"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
