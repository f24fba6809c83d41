//! Contract every mapping store must honor, run against each implementation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use shortlink::domain::entities::NewMapping;
use shortlink::domain::errors::StoreError;
use shortlink::domain::repositories::MappingRepository;
use shortlink::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
use sqlx::PgPool;
use std::sync::Arc;

fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn new_mapping(code: &str) -> NewMapping {
    NewMapping {
        short_code: code.to_string(),
        target_url: format!("https://example.com/{code}"),
        created_at: created_at(),
        expires_at: Some(created_at() + Duration::hours(1)),
        is_custom_alias: false,
    }
}

async fn insert_then_find(repo: &dyn MappingRepository) {
    let created = repo.insert_if_absent(new_mapping("abc123")).await.unwrap();

    assert_eq!(created.short_code, "abc123");
    assert_eq!(created.target_url, "https://example.com/abc123");
    assert!(created.is_active);
    assert_eq!(created.click_count, 0);
    assert_eq!(created.expires_at, Some(created_at() + Duration::hours(1)));

    let found = repo.find_active_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(repo.exists("abc123").await.unwrap());
    assert!(!repo.exists("other").await.unwrap());
    assert!(repo.find_active_by_code("other").await.unwrap().is_none());
}

async fn duplicate_code_conflicts(repo: &dyn MappingRepository) {
    repo.insert_if_absent(new_mapping("dup")).await.unwrap();

    let result = repo.insert_if_absent(new_mapping("dup")).await;

    assert!(matches!(result, Err(StoreError::Conflict(code)) if code == "dup"));
}

async fn increment_is_cumulative(repo: &dyn MappingRepository) {
    let created = repo.insert_if_absent(new_mapping("clicks")).await.unwrap();

    repo.increment_clicks(created.id).await.unwrap();
    let updated = repo.increment_clicks(created.id).await.unwrap();

    assert_eq!(updated.click_count, 2);
}

async fn deactivate_hides_but_reserves_code(repo: &dyn MappingRepository) {
    let created = repo.insert_if_absent(new_mapping("bye")).await.unwrap();

    let deactivated = repo.deactivate(created.id).await.unwrap();
    assert!(!deactivated.is_active);

    // Idempotent
    repo.deactivate(created.id).await.unwrap();

    assert!(repo.find_active_by_code("bye").await.unwrap().is_none());
    assert!(repo.exists("bye").await.unwrap());
    assert!(matches!(
        repo.insert_if_absent(new_mapping("bye")).await,
        Err(StoreError::Conflict(_))
    ));
}

async fn list_is_ordered_and_counts_active(repo: &dyn MappingRepository) {
    let mut ids = Vec::new();
    for code in ["aaa", "bbb", "ccc", "ddd", "eee"] {
        ids.push(repo.insert_if_absent(new_mapping(code)).await.unwrap().id);
    }
    repo.deactivate(ids[1]).await.unwrap();

    let first = repo.list_active_page(0, 2).await.unwrap();
    assert_eq!(first.total, 4);
    let codes: Vec<_> = first.items.iter().map(|m| m.short_code.as_str()).collect();
    assert_eq!(codes, ["aaa", "ccc"]);

    let second = repo.list_active_page(2, 2).await.unwrap();
    let codes: Vec<_> = second.items.iter().map(|m| m.short_code.as_str()).collect();
    assert_eq!(codes, ["ddd", "eee"]);

    let past_end = repo.list_active_page(4, 2).await.unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 4);
}

async fn ping_answers(repo: &dyn MappingRepository) {
    assert!(repo.ping().await.is_ok());
}

// ── In-memory ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_memory_insert_then_find() {
    insert_then_find(&InMemoryMappingRepository::new()).await;
}

#[tokio::test]
async fn test_memory_duplicate_code_conflicts() {
    duplicate_code_conflicts(&InMemoryMappingRepository::new()).await;
}

#[tokio::test]
async fn test_memory_increment_is_cumulative() {
    increment_is_cumulative(&InMemoryMappingRepository::new()).await;
}

#[tokio::test]
async fn test_memory_deactivate_hides_but_reserves_code() {
    deactivate_hides_but_reserves_code(&InMemoryMappingRepository::new()).await;
}

#[tokio::test]
async fn test_memory_list_is_ordered_and_counts_active() {
    list_is_ordered_and_counts_active(&InMemoryMappingRepository::new()).await;
}

#[tokio::test]
async fn test_memory_ping() {
    ping_answers(&InMemoryMappingRepository::new()).await;
}

// ── PostgreSQL ──────────────────────────────────────────────────────────────

fn pg(pool: PgPool) -> PgMappingRepository {
    PgMappingRepository::new(Arc::new(pool))
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_insert_then_find(pool: PgPool) {
    insert_then_find(&pg(pool)).await;
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_duplicate_code_conflicts(pool: PgPool) {
    duplicate_code_conflicts(&pg(pool)).await;
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_increment_is_cumulative(pool: PgPool) {
    increment_is_cumulative(&pg(pool)).await;
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_deactivate_hides_but_reserves_code(pool: PgPool) {
    deactivate_hides_but_reserves_code(&pg(pool)).await;
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_list_is_ordered_and_counts_active(pool: PgPool) {
    list_is_ordered_and_counts_active(&pg(pool)).await;
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_ping(pool: PgPool) {
    ping_answers(&pg(pool)).await;
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_find_by_code_sees_inactive(pool: PgPool) {
    let repo = pg(pool);
    let created = repo.insert_if_absent(new_mapping("hidden")).await.unwrap();
    repo.deactivate(created.id).await.unwrap();

    let found = repo.find_by_code("hidden").await.unwrap().unwrap();
    assert!(!found.is_active);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_concurrent_inserts_single_winner(pool: PgPool) {
    let repo = Arc::new(pg(pool));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.insert_if_absent(new_mapping("race")).await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            winners += 1;
        }
    }

    assert_eq!(winners, 1);
}
