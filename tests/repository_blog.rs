mod common;

use std::sync::Arc;

use bloglist::AppError;
use bloglist::domain::entities::{BlogPatch, NewBlog};
use bloglist::domain::repositories::BlogRepository;
use bloglist::infrastructure::persistence::PgBlogRepository;
use sqlx::PgPool;

fn new_blog(title: &str, author: &str, likes: i64, user_id: i64) -> NewBlog {
    NewBlog {
        title: title.to_string(),
        author: author.to_string(),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        likes,
        user_id,
    }
}

#[sqlx::test]
async fn test_create_joins_creator_username(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    let repo = PgBlogRepository::new(Arc::new(pool));

    let blog = repo
        .create(new_blog("React patterns", "Michael Chan", 7, user_id))
        .await
        .unwrap();

    assert_eq!(blog.title, "React patterns");
    assert_eq!(blog.likes, 7);
    assert_eq!(blog.user_id, user_id);
    assert_eq!(blog.username.as_deref(), Some("testUsername"));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    let blog_id = common::create_test_blog(&pool, "React patterns", "Michael Chan", 7, user_id).await;

    let repo = PgBlogRepository::new(Arc::new(pool));

    let blog = repo.find_by_id(blog_id).await.unwrap().unwrap();
    assert_eq!(blog.id, blog_id);
    assert_eq!(blog.author, "Michael Chan");

    assert!(repo.find_by_id(424242).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_all_in_creation_order(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    common::create_test_blog(&pool, "first", "A", 1, user_id).await;
    common::create_test_blog(&pool, "second", "B", 2, user_id).await;
    common::create_test_blog(&pool, "third", "C", 3, user_id).await;

    let repo = PgBlogRepository::new(Arc::new(pool));

    let blogs = repo.list_all().await.unwrap();

    assert_eq!(blogs.len(), 3);
    let titles: Vec<&str> = blogs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[sqlx::test]
async fn test_update_patches_only_given_fields(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    let blog_id = common::create_test_blog(&pool, "React patterns", "Michael Chan", 7, user_id).await;

    let repo = PgBlogRepository::new(Arc::new(pool));

    let patch = BlogPatch {
        likes: Some(9),
        ..Default::default()
    };
    let updated = repo.update(blog_id, patch).await.unwrap();

    assert_eq!(updated.likes, 9);
    assert_eq!(updated.title, "React patterns");
    assert_eq!(updated.author, "Michael Chan");
}

#[sqlx::test]
async fn test_update_unknown_id_is_not_found(pool: PgPool) {
    let repo = PgBlogRepository::new(Arc::new(pool));

    let patch = BlogPatch {
        likes: Some(1),
        ..Default::default()
    };
    let result = repo.update(424242, patch).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    let blog_id = common::create_test_blog(&pool, "React patterns", "Michael Chan", 7, user_id).await;

    let repo = PgBlogRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(blog_id).await.unwrap());
    assert!(!repo.delete(blog_id).await.unwrap());
    assert_eq!(common::blogs_in_db(&pool).await, 0);
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    let repo = PgBlogRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 0);

    repo.create(new_blog("one", "A", 0, user_id)).await.unwrap();
    repo.create(new_blog("two", "B", 0, user_id)).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_deleting_user_cascades_to_blogs(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "testUsername", "testPassword").await;
    common::create_test_blog(&pool, "React patterns", "Michael Chan", 7, user_id).await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(common::blogs_in_db(&pool).await, 0);
}
