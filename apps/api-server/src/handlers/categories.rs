//! Category handlers.

use actix_web::{HttpResponse, web};

use blog_shared::ErrorResponse;
use blog_shared::dto::{CategoryRequest, CategoryResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// Get all categories.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses((status = 200, description = "All categories", body = Vec<CategoryResponse>))
)]
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("REST request to get all categories");

    let categories = state.categories.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Get category by ID.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = CategoryResponse),
        (status = 404, description = "No such category", body = ErrorResponse)
    )
)]
pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(category_id = id, "REST request to get category");

    let category = state.categories.get_category(id).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Create new category.
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let input = validation::category_input(body.into_inner())?;
    tracing::info!(name = %input.name, "REST request to save category");

    let category = state.categories.create_category(input).await?;
    Ok(HttpResponse::Created().json(category))
}

/// Update category.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such category", body = ErrorResponse)
    )
)]
pub async fn update_category(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let input = validation::category_input(body.into_inner())?;
    tracing::info!(category_id = id, "REST request to update category");

    let category = state.categories.update_category(id, input).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// Delete category, together with its posts and their comments.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "No such category", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(category_id = id, "REST request to delete category");

    state.categories.delete_category(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
