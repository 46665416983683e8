//! Request validation - turns wire DTOs into validated domain inputs.
//!
//! Every check runs before a request reaches a service. All failing fields
//! are reported together.

use blog_core::PageRequest;
use blog_core::domain::{CategoryInput, CommentInput, PostInput};
use blog_shared::FieldError;
use blog_shared::dto::{CategoryRequest, CommentRequest, PostListQuery, PostRequest};

use crate::middleware::error::AppError;

/// Collects field failures while pulling required values out of a request.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    /// A present, non-blank string; blank values count as missing.
    fn required(&mut self, field: &str, label: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ => {
                self.errors
                    .push(FieldError::new(field, format!("{label} is required")));
                None
            }
        }
    }

    fn required_id(&mut self, field: &str, label: &str, value: Option<i64>) -> Option<i64> {
        if value.is_none() {
            self.errors
                .push(FieldError::new(field, format!("{label} is required")));
        }
        value
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, AppError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(AppError::Validation(self.errors)),
        }
    }
}

pub fn category_input(req: CategoryRequest) -> Result<CategoryInput, AppError> {
    let mut check = Checker::default();
    let name = check.required("name", "Name", req.name);

    let input = name.map(|name| CategoryInput {
        name,
        description: req.description,
    });
    check.finish(input)
}

pub fn post_input(req: PostRequest) -> Result<PostInput, AppError> {
    let mut check = Checker::default();
    let title = check.required("title", "Title", req.title);
    let content = check.required("content", "Content", req.content);
    let author = check.required("author", "Author", req.author);
    let category_id = check.required_id("categoryId", "Category ID", req.category_id);

    let input = match (title, content, author, category_id) {
        (Some(title), Some(content), Some(author), Some(category_id)) => Some(PostInput {
            title,
            content,
            author,
            category_id,
        }),
        _ => None,
    };
    check.finish(input)
}

pub fn comment_input(req: CommentRequest) -> Result<CommentInput, AppError> {
    let mut check = Checker::default();
    let content = check.required("content", "Content", req.content);
    let author = check.required("author", "Author", req.author);

    let input = match (content, author) {
        (Some(content), Some(author)) => Some(CommentInput { content, author }),
        _ => None,
    };
    check.finish(input)
}

/// Apply paging defaults; an unknown sort is a bad request.
pub fn page_request(query: PostListQuery) -> Result<PageRequest, AppError> {
    PageRequest::from_parts(query.page, query.size, query.sort.as_deref()).map_err(Into::into)
}
