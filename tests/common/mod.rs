#![allow(dead_code)]

use std::sync::Arc;

use nearserve::infrastructure::media::{LocalMediaStore, MediaStore, NullMediaStore};
use nearserve::state::AppState;
use sqlx::PgPool;

/// Inserts a user with a permanent location and returns its id.
pub async fn create_test_user(pool: &PgPool, name: &str, role: &str, lat: f64, lng: f64) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (email, user_name, role, permanent_latitude, permanent_longitude)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(format!("{name}@example.test"))
    .bind(name)
    .bind(role)
    .bind(lat)
    .bind(lng)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a user with no registered location and returns its id.
pub async fn create_unlocated_user(pool: &PgPool, name: &str, role: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (email, user_name, role)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(format!("{name}@example.test"))
    .bind(name)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO service_categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_listing(
    pool: &PgPool,
    provider_id: i64,
    category_id: i64,
    title: &str,
    approved: bool,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO listings (provider_id, category_id, title, price, is_approved)
        VALUES ($1, $2, $3, 100.00, $4)
        RETURNING id
        "#,
    )
    .bind(provider_id)
    .bind(category_id)
    .bind(title)
    .bind(approved)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Application state over the test pool with image uploads disabled.
pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), Arc::new(NullMediaStore::new()))
}

/// Application state with a disk-backed media store rooted at `dir`.
pub async fn create_test_state_with_media(pool: PgPool, dir: &std::path::Path) -> AppState {
    let store = LocalMediaStore::create(
        dir.to_path_buf(),
        "http://localhost:3000".to_string(),
        1024 * 1024,
    )
    .await
    .unwrap();
    let store: Arc<dyn MediaStore> = Arc::new(store);
    AppState::new(Arc::new(pool), store)
}
