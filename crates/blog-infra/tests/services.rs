use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use blog_core::domain::{Category, CategoryInput, CommentInput, PostInput};
use blog_core::error::{DomainError, RepoError};
use blog_core::pagination::{PageRequest, SortDirection};
use blog_core::ports::{BaseRepository, CategoryRepository};
use blog_infra::InMemoryBlogStore;

mod common;

use common::Services;

fn category_input(name: &str) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        description: Some(format!("{name} posts")),
    }
}

fn post_input(title: &str, category_id: i64) -> PostInput {
    PostInput {
        title: title.to_string(),
        content: "C".to_string(),
        author: "A".to_string(),
        category_id,
    }
}

fn comment_input(content: &str) -> CommentInput {
    CommentInput {
        content: content.to_string(),
        author: "Bob".to_string(),
    }
}

/// Category repository that counts id lookups.
struct CountingCategories {
    inner: Arc<InMemoryBlogStore>,
    lookups: AtomicUsize,
}

#[async_trait]
impl BaseRepository<Category, i64> for CountingCategories {
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepoError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        BaseRepository::<Category, i64>::find_by_id(self.inner.as_ref(), id).await
    }

    async fn exists(&self, id: i64) -> Result<bool, RepoError> {
        BaseRepository::<Category, i64>::exists(self.inner.as_ref(), id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        BaseRepository::<Category, i64>::delete(self.inner.as_ref(), id).await
    }
}

#[async_trait]
impl CategoryRepository for CountingCategories {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        self.inner.find_all().await
    }

    async fn insert(&self, category: CategoryInput) -> Result<Category, RepoError> {
        CategoryRepository::insert(self.inner.as_ref(), category).await
    }

    async fn update(&self, category: Category) -> Result<Category, RepoError> {
        CategoryRepository::update(self.inner.as_ref(), category).await
    }
}

#[tokio::test]
async fn created_category_reads_back_unchanged() {
    let services = Services::in_memory();

    let created = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    let fetched = services.categories.get_category(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Technology");
    assert_eq!(fetched.description.as_deref(), Some("Technology posts"));
}

#[tokio::test]
async fn update_missing_category_is_not_found_and_changes_nothing() {
    let services = Services::in_memory();
    services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();

    let result = services
        .categories
        .update_category(42, category_input("Other"))
        .await;

    assert_eq!(result, Err(DomainError::category_not_found(42)));
    let all = services.categories.list_categories().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Technology");
}

#[tokio::test]
async fn deleting_category_twice_is_not_found() {
    let services = Services::in_memory();
    let created = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();

    services.categories.delete_category(created.id).await.unwrap();
    let second = services.categories.delete_category(created.id).await;

    assert_eq!(second, Err(DomainError::category_not_found(created.id)));
}

#[tokio::test]
async fn create_post_with_missing_category_persists_nothing() {
    let services = Services::in_memory();

    let result = services.posts.create_post(post_input("T", 7)).await;

    assert_eq!(result, Err(DomainError::category_not_found(7)));
    let page = services.posts.list_posts(&PageRequest::default()).await.unwrap();
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
async fn update_post_moves_to_another_category() {
    let services = Services::in_memory();
    let tech = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    let travel = services
        .categories
        .create_category(category_input("Travel"))
        .await
        .unwrap();
    let post = services
        .posts
        .create_post(post_input("T", tech.id))
        .await
        .unwrap();

    let updated = services
        .posts
        .update_post(post.id, post_input("T2", travel.id))
        .await
        .unwrap();
    let fetched = services.posts.get_post(post.id).await.unwrap();

    assert_eq!(updated.category_id, travel.id);
    assert_eq!(fetched.title, "T2");
    assert_eq!(fetched.category_id, travel.id);
    assert_eq!(fetched.category_name, "Travel");
    assert_eq!(fetched.created_at, post.created_at);
    assert!(fetched.updated_at >= post.updated_at);
}

#[tokio::test]
async fn update_post_to_missing_category_is_not_found() {
    let services = Services::in_memory();
    let tech = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    let post = services
        .posts
        .create_post(post_input("T", tech.id))
        .await
        .unwrap();

    let result = services
        .posts
        .update_post(post.id, post_input("T2", 99))
        .await;

    assert_eq!(result, Err(DomainError::category_not_found(99)));
    let fetched = services.posts.get_post(post.id).await.unwrap();
    assert_eq!(fetched.title, "T");
    assert_eq!(fetched.category_id, tech.id);
}

#[tokio::test]
async fn update_post_with_same_category_skips_lookup() {
    let store = Arc::new(InMemoryBlogStore::new());
    let counting = Arc::new(CountingCategories {
        inner: store.clone(),
        lookups: AtomicUsize::new(0),
    });
    let services = Services::wire(counting.clone(), store.clone(), store);

    let tech = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    let post = services
        .posts
        .create_post(post_input("T", tech.id))
        .await
        .unwrap();
    let before = counting.lookups.load(Ordering::SeqCst);

    let updated = services
        .posts
        .update_post(post.id, post_input("T2", tech.id))
        .await
        .unwrap();

    assert_eq!(counting.lookups.load(Ordering::SeqCst), before);
    assert_eq!(updated.title, "T2");
    assert_eq!(updated.category_name, "Technology");
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let services = Services::in_memory();

    let result = services.posts.update_post(3, post_input("T", 1)).await;

    assert_eq!(result, Err(DomainError::post_not_found(3)));
}

#[tokio::test]
async fn list_posts_defaults_to_ten_newest_first() {
    let services = Services::in_memory();
    let tech = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    for i in 0..12 {
        services
            .posts
            .create_post(post_input(&format!("post {i}"), tech.id))
            .await
            .unwrap();
    }

    let request = PageRequest::from_parts(None, None, None).unwrap();
    assert_eq!(request.sort.direction, SortDirection::Desc);
    let page = services.posts.list_posts(&request).await.unwrap();

    assert_eq!(page.size, 10);
    assert_eq!(page.content.len(), 10);
    assert_eq!(page.total_elements, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content[0].title, "post 11");
    assert!(
        page.content
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at)
    );
}

#[tokio::test]
async fn list_posts_by_missing_category_is_not_found() {
    let services = Services::in_memory();

    let result = services.posts.list_posts_by_category(5).await;

    assert_eq!(result, Err(DomainError::category_not_found(5)));
}

#[tokio::test]
async fn list_posts_by_category_includes_category_name() {
    let services = Services::in_memory();
    let tech = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    let travel = services
        .categories
        .create_category(category_input("Travel"))
        .await
        .unwrap();
    services
        .posts
        .create_post(post_input("a", tech.id))
        .await
        .unwrap();
    services
        .posts
        .create_post(post_input("b", travel.id))
        .await
        .unwrap();
    services
        .posts
        .create_post(post_input("c", tech.id))
        .await
        .unwrap();

    let posts = services.posts.list_posts_by_category(tech.id).await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
    assert!(posts.iter().all(|p| p.category_name == "Technology"));
}

#[tokio::test]
async fn add_comment_to_missing_post_persists_nothing() {
    let services = Services::in_memory();

    let result = services.comments.add_comment(8, comment_input("Nice")).await;

    assert_eq!(result, Err(DomainError::post_not_found(8)));
    assert_eq!(
        services.comments.get_comment(1).await,
        Err(DomainError::comment_not_found(1))
    );
}

#[tokio::test]
async fn update_comment_keeps_created_at() {
    let services = Services::in_memory();
    let tech = services
        .categories
        .create_category(category_input("Technology"))
        .await
        .unwrap();
    let post = services
        .posts
        .create_post(post_input("T", tech.id))
        .await
        .unwrap();
    let comment = services
        .comments
        .add_comment(post.id, comment_input("Nice"))
        .await
        .unwrap();

    let updated = services
        .comments
        .update_comment(
            comment.id,
            CommentInput {
                content: "Nicer".to_string(),
                author: "Alice".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.content, "Nicer");
    assert_eq!(updated.author, "Alice");
    assert_eq!(updated.created_at, comment.created_at);
}

#[tokio::test]
async fn delete_missing_comment_is_not_found() {
    let services = Services::in_memory();

    let result = services.comments.delete_comment(4).await;

    assert_eq!(result, Err(DomainError::comment_not_found(4)));
}

async fn blog_scenario(services: Services) {
    let tech = services
        .categories
        .create_category(CategoryInput {
            name: "Technology".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(tech.id, 1);

    let post = services
        .posts
        .create_post(post_input("T", tech.id))
        .await
        .unwrap();
    assert_eq!(post.category_id, 1);
    assert_eq!(post.category_name, "Technology");

    services
        .comments
        .add_comment(post.id, comment_input("Nice"))
        .await
        .unwrap();
    let comments = services.comments.list_comments(post.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "Nice");

    // Deleting the category cascades to its posts and their comments.
    services.categories.delete_category(tech.id).await.unwrap();

    assert_eq!(
        services.posts.get_post(post.id).await,
        Err(DomainError::post_not_found(post.id))
    );
    assert_eq!(
        services.comments.list_comments(post.id).await,
        Err(DomainError::post_not_found(post.id))
    );
    assert_eq!(
        services.comments.get_comment(comments[0].id).await,
        Err(DomainError::comment_not_found(comments[0].id))
    );
}

#[tokio::test]
async fn blog_scenario_in_memory() {
    blog_scenario(Services::in_memory()).await;
}

#[tokio::test]
async fn blog_scenario_sqlite() {
    blog_scenario(Services::sqlite().await).await;
}
