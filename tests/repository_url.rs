use chrono::{Duration, Utc};
use shortlink::domain::entities::NewShortUrl;
use shortlink::domain::repositories::UrlRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_url(code: &str, expires_in: Option<Duration>) -> NewShortUrl {
    NewShortUrl {
        short_code: code.to_string(),
        long_url: format!("https://example.com/{code}"),
        created_by_ip: Some("192.0.2.1".to_string()),
        expires_at: expires_in.map(|d| Utc::now() + d),
    }
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo.create(new_url("abcDEF", None)).await.unwrap();
    assert_eq!(created.short_code, "abcDEF");
    assert_eq!(created.clicks, 0);
    assert_eq!(created.created_by_ip.as_deref(), Some("192.0.2.1"));

    assert!(repo.exists("abcDEF").await.unwrap());
    assert!(!repo.exists("zzzzzz").await.unwrap());

    let found = repo.find_by_code("abcDEF").await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_url("dupe22", None)).await.unwrap();
    let err = repo.create(new_url("dupe22", None)).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_find_active_filters_expired(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_url("live22", Some(Duration::hours(1))))
        .await
        .unwrap();
    repo.create(new_url("gone22", Some(Duration::hours(-1))))
        .await
        .unwrap();
    repo.create(new_url("ever22", None)).await.unwrap();

    let now = Utc::now();
    assert!(repo.find_active("live22", now).await.unwrap().is_some());
    assert!(repo.find_active("gone22", now).await.unwrap().is_none());
    assert!(repo.find_active("ever22", now).await.unwrap().is_some());
    assert!(repo.find_by_code("gone22").await.unwrap().is_some());

    let later = now + Duration::hours(2);
    assert!(repo.find_active("live22", later).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.create(new_url("count2", None)).await.unwrap();

    for _ in 0..3 {
        repo.increment_clicks("count2").await.unwrap();
    }
    repo.increment_clicks("nothere").await.unwrap();

    let found = repo.find_by_code("count2").await.unwrap().unwrap();
    assert_eq!(found.clicks, 3);
}
