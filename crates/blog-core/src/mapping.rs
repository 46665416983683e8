//! Entity to response-shape conversions.

use blog_shared::dto::{CategoryResponse, CommentResponse, PageResponse, PostResponse};

use crate::domain::{Category, Comment, PostWithCategory};
use crate::pagination::PageRequest;

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

/// The category name comes from the category loaded alongside the post.
impl From<PostWithCategory> for PostResponse {
    fn from(PostWithCategory { post, category }: PostWithCategory) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            category_id: category.id,
            category_name: category.name,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author: comment.author,
            created_at: comment.created_at,
        }
    }
}

/// Map a slice of rows into a page envelope.
pub fn to_page<E, R>(request: &PageRequest, total: u64, rows: Vec<E>) -> PageResponse<R>
where
    R: From<E>,
{
    let content = rows.into_iter().map(R::from).collect();
    PageResponse::new(content, request.page, request.size, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;
    use chrono::Utc;

    #[test]
    fn post_response_carries_category_name() {
        let now = Utc::now();
        let row = PostWithCategory {
            post: Post {
                id: 4,
                title: "T".to_string(),
                content: "C".to_string(),
                author: "A".to_string(),
                category_id: 1,
                created_at: now,
                updated_at: now,
            },
            category: Category {
                id: 1,
                name: "Technology".to_string(),
                description: None,
            },
        };

        let response = PostResponse::from(row);

        assert_eq!(response.id, 4);
        assert_eq!(response.category_id, 1);
        assert_eq!(response.category_name, "Technology");
        assert_eq!(response.created_at, now);
    }

    #[test]
    fn to_page_keeps_request_metadata() {
        let request = PageRequest::from_parts(Some(1), Some(2), None).unwrap();
        let rows = vec![Category {
            id: 3,
            name: "Rust".to_string(),
            description: Some("systems".to_string()),
        }];

        let page: PageResponse<CategoryResponse> = to_page(&request, 3, rows);

        assert_eq!(page.number, 1);
        assert_eq!(page.size, 2);
        assert_eq!(page.total_pages, 2);
        assert!(page.last);
        assert_eq!(page.content[0].name, "Rust");
    }
}
