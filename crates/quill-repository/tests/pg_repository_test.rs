//! Integration tests for the PostgreSQL repositories.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker; run with `cargo test -- --ignored`.

mod common;

use common::TestDatabase;
use quill_core::{NewPost, NewUser, PostPatch, User, UserId};
use quill_repository::{PgPostRepository, PgUserRepository, PostRepository, UserRepository};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_user_crud_round() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool());

    let created = repo.create(&NewUser::new("alice")).await.expect("insert");
    assert_eq!(created.name, "alice");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("query")
        .expect("user not found");
    assert_eq!(found, created);

    repo.update(&User::new(created.id, "alice b."))
        .await
        .expect("update");
    let updated = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "alice b.");

    assert!(repo.delete(created.id).await.expect("delete"));
    assert!(!repo.delete(created.id).await.expect("second delete"));
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_user_is_silent() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool());

    repo.update(&User::new(UserId::new(4242), "nobody"))
        .await
        .expect("update of a missing row succeeds");
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_post_patch_uses_coalesce() {
    let db = TestDatabase::new().await;
    let repo = PgPostRepository::new(db.pool());

    let post = repo
        .create(&NewPost::new("A", "B", UserId::new(1)))
        .await
        .expect("insert");

    let patch = PostPatch {
        title: Some("C".to_string()),
        ..PostPatch::default()
    };
    repo.patch(post.id, &patch).await.expect("patch");

    let found = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(found.title, "C");
    assert_eq!(found.content, "B");
    assert_eq!(found.user_id, UserId::new(1));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_many_and_delete_by_user() {
    let db = TestDatabase::new().await;
    let repo = PgPostRepository::new(db.pool());
    let owner = UserId::new(9);

    let created = repo
        .create_many(&[
            NewPost::new("one", "1", owner),
            NewPost::new("two", "2", owner),
            NewPost::new("three", "3", owner),
        ])
        .await
        .expect("batch insert");
    assert_eq!(created.len(), 3);
    assert!(created.iter().all(|p| p.user_id == owner));

    let other = repo
        .create(&NewPost::new("other", "x", UserId::new(10)))
        .await
        .unwrap();

    let mut removed = repo.delete_by_user(owner).await.expect("cascade");
    removed.sort();
    let mut expected: Vec<_> = created.iter().map(|p| p.id).collect();
    expected.sort();
    assert_eq!(removed, expected);

    assert_eq!(repo.find_all().await.unwrap(), vec![other]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_many_rolls_back_when_a_later_insert_fails() {
    let db = TestDatabase::new().await;
    let repo = PgPostRepository::new(db.pool());
    let owner = UserId::new(9);

    // PostgreSQL rejects NUL bytes in text columns.
    let err = repo
        .create_many(&[
            NewPost::new("one", "1", owner),
            NewPost::new("bad\0title", "2", owner),
        ])
        .await
        .expect_err("second insert must fail");

    assert!(err.is_store_failure());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_orders_by_key() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.pool());

    for name in ["carol", "alice", "bob"] {
        repo.create(&NewUser::new(name)).await.unwrap();
    }

    let users = repo.find_all().await.unwrap();
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["carol", "alice", "bob"]);
    assert!(users.windows(2).all(|w| w[0].id < w[1].id));
}
