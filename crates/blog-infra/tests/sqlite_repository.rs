use chrono::{Duration, Utc};

use blog_core::domain::{Category, CategoryInput, Comment, NewComment, NewPost, Post};
use blog_core::error::RepoError;
use blog_core::pagination::PageRequest;
use blog_core::ports::{BaseRepository, CategoryRepository, CommentRepository, PostRepository};
use blog_infra::database::{SeaCategoryRepository, SeaCommentRepository, SeaPostRepository};

mod common;

struct Repos {
    categories: SeaCategoryRepository,
    posts: SeaPostRepository,
    comments: SeaCommentRepository,
}

async fn repos() -> Repos {
    let db = common::sqlite_db().await;
    Repos {
        categories: SeaCategoryRepository::new(db.clone()),
        posts: SeaPostRepository::new(db.clone()),
        comments: SeaCommentRepository::new(db),
    }
}

async fn category(repos: &Repos, name: &str) -> Category {
    CategoryRepository::insert(
        &repos.categories,
        CategoryInput {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("should create category")
}

fn new_post(title: &str, category_id: i64, minutes_ago: i64) -> NewPost {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    NewPost {
        title: title.to_string(),
        content: "content".to_string(),
        author: "author".to_string(),
        category_id,
        created_at: at,
        updated_at: at,
    }
}

#[tokio::test]
async fn insert_assigns_sequential_ids_and_lists_in_order() {
    let repos = repos().await;

    let first = category(&repos, "Technology").await;
    let second = category(&repos, "Travel").await;
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let all = repos.categories.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Technology", "Travel"]);
}

#[tokio::test]
async fn find_with_category_joins_category_name() {
    let repos = repos().await;
    let tech = category(&repos, "Technology").await;
    let post = PostRepository::insert(&repos.posts, new_post("T", tech.id, 0))
        .await
        .unwrap();

    let joined = repos
        .posts
        .find_with_category(post.id)
        .await
        .unwrap()
        .expect("post should exist");

    assert_eq!(joined.post.title, "T");
    assert_eq!(joined.category.id, tech.id);
    assert_eq!(joined.category.name, "Technology");
}

#[tokio::test]
async fn insert_post_with_missing_category_violates_constraint() {
    let repos = repos().await;

    let result = PostRepository::insert(&repos.posts, new_post("T", 99, 0)).await;

    assert!(matches!(result, Err(RepoError::Constraint(_))));
    let (total, _) = repos.posts.find_page(&PageRequest::default()).await.unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn find_page_orders_newest_first_and_counts_all() {
    let repos = repos().await;
    let tech = category(&repos, "Technology").await;
    for (title, minutes_ago) in [("old", 30), ("new", 1), ("mid", 10)] {
        PostRepository::insert(&repos.posts, new_post(title, tech.id, minutes_ago))
            .await
            .unwrap();
    }

    let request = PageRequest::from_parts(Some(0), Some(2), None).unwrap();
    let (total, rows) = repos.posts.find_page(&request).await.unwrap();

    assert_eq!(total, 3);
    let titles: Vec<&str> = rows.iter().map(|r| r.post.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "mid"]);

    let request = PageRequest::from_parts(Some(1), Some(2), None).unwrap();
    let (_, rows) = repos.posts.find_page(&request).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].post.title, "old");
}

#[tokio::test]
async fn find_page_honours_explicit_sort() {
    let repos = repos().await;
    let tech = category(&repos, "Technology").await;
    for title in ["b", "c", "a"] {
        PostRepository::insert(&repos.posts, new_post(title, tech.id, 0))
            .await
            .unwrap();
    }

    let request = PageRequest::from_parts(None, None, Some("title,asc")).unwrap();
    let (_, rows) = repos.posts.find_page(&request).await.unwrap();

    let titles: Vec<&str> = rows.iter().map(|r| r.post.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn find_by_category_id_filters() {
    let repos = repos().await;
    let tech = category(&repos, "Technology").await;
    let travel = category(&repos, "Travel").await;
    PostRepository::insert(&repos.posts, new_post("rust", tech.id, 0))
        .await
        .unwrap();
    PostRepository::insert(&repos.posts, new_post("lisbon", travel.id, 0))
        .await
        .unwrap();

    let rows = repos.posts.find_by_category_id(travel.id).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].post.title, "lisbon");
    assert_eq!(rows[0].category.name, "Travel");
}

#[tokio::test]
async fn deleting_category_cascades_to_posts_and_comments() {
    let repos = repos().await;
    let tech = category(&repos, "Technology").await;
    let post = PostRepository::insert(&repos.posts, new_post("T", tech.id, 0))
        .await
        .unwrap();
    let comment = CommentRepository::insert(
        &repos.comments,
        NewComment {
            post_id: post.id,
            content: "Nice".to_string(),
            author: "Bob".to_string(),
            created_at: Utc::now(),
        },
    )
    .await
    .unwrap();

    BaseRepository::<Category, i64>::delete(&repos.categories, tech.id)
        .await
        .unwrap();

    let post_left: Option<Post> = repos.posts.find_by_id(post.id).await.unwrap();
    let comment_left: Option<Comment> = repos.comments.find_by_id(comment.id).await.unwrap();
    assert!(post_left.is_none());
    assert!(comment_left.is_none());
}

#[tokio::test]
async fn update_missing_row_is_not_found() {
    let repos = repos().await;

    let result = CategoryRepository::update(
        &repos.categories,
        Category {
            id: 5,
            name: "ghost".to_string(),
            description: None,
        },
    )
    .await;

    assert_eq!(result, Err(RepoError::NotFound));
}

#[tokio::test]
async fn delete_missing_row_is_not_found() {
    let repos = repos().await;

    let result = BaseRepository::<Comment, i64>::delete(&repos.comments, 3).await;

    assert_eq!(result, Err(RepoError::NotFound));
}
