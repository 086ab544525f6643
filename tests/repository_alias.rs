mod common;

use sqlx::SqlitePool;
use std::sync::Arc;
use url_alias::StorageError;
use url_alias::domain::repositories::AliasRepository;

#[sqlx::test(migrations = false)]
async fn test_save_and_resolve(pool: SqlitePool) {
    let repo = common::create_test_repository(pool).await;

    let id = repo.save("https://example.com", "example").await.unwrap();
    assert!(id > 0);

    let url = repo.resolve("example").await.unwrap();
    assert_eq!(url, "https://example.com");
}

#[sqlx::test(migrations = false)]
async fn test_sequential_saves_get_distinct_increasing_ids(pool: SqlitePool) {
    let repo = common::create_test_repository(pool).await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let id = repo
            .save(&format!("https://example.com/{i}"), &format!("alias-{i}"))
            .await
            .unwrap();
        ids.push(id);
    }

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 5);
    assert_eq!(sorted, ids, "ids must follow insertion order");
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_alias_rejected_without_mutation(pool: SqlitePool) {
    let repo = common::create_test_repository(pool.clone()).await;

    repo.save("https://first.example.com", "taken").await.unwrap();

    let err = repo
        .save("https://second.example.com", "taken")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::AliasExists));

    // First row untouched, no duplicate row created.
    let url = repo.resolve("taken").await.unwrap();
    assert_eq!(url, "https://first.example.com");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = ?1")
        .bind("taken")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = false)]
async fn test_resolve_missing_alias(pool: SqlitePool) {
    let repo = common::create_test_repository(pool).await;

    let err = repo.resolve("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::AliasNotFound));
}

#[sqlx::test(migrations = false)]
async fn test_delete_missing_alias(pool: SqlitePool) {
    let repo = common::create_test_repository(pool).await;

    let err = repo.delete("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::AliasNotFound));
}

#[sqlx::test(migrations = false)]
async fn test_delete_then_resolve_fails(pool: SqlitePool) {
    let repo = common::create_test_repository(pool).await;

    repo.save("https://example.com", "gone").await.unwrap();
    repo.delete("gone").await.unwrap();

    let err = repo.resolve("gone").await.unwrap_err();
    assert!(matches!(err, StorageError::AliasNotFound));
}

#[sqlx::test(migrations = false)]
async fn test_concurrent_saves_same_alias_one_winner(pool: SqlitePool) {
    let repo = Arc::new(common::create_test_repository(pool.clone()).await);

    let a = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.save("https://a.example.com", "race").await })
    };
    let b = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.save("https://b.example.com", "race").await })
    };

    let (a, b) = (a.await.unwrap(), b.await.unwrap());

    let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
    let losers = [&a, &b]
        .iter()
        .filter(|r| matches!(r, Err(StorageError::AliasExists)))
        .count();
    assert_eq!(winners, 1, "exactly one concurrent save must win");
    assert_eq!(losers, 1, "the other must see a uniqueness violation");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = ?1")
        .bind("race")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
