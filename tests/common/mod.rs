#![allow(dead_code)]

//! Fixtures shared by the HTTP tests.
//!
//! Every test gets its own migrated database from `#[sqlx::test]`; the
//! helpers here seed it and build the application state on top of it.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use store_admin::domain::entities::Service;
use store_admin::server::build_state;
use store_admin::state::AppState;

pub const OWNER_TOKEN: &str = "owner-token";
pub const STRANGER_TOKEN: &str = "stranger-token";
pub const OWNER_ID: &str = "user_1";
pub const STRANGER_ID: &str = "user_2";

fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, n, 9, 0, 0).unwrap()
}

pub async fn create_test_store(pool: &PgPool, id: &str, name: &str, user_id: &str) {
    sqlx::query!(
        "INSERT INTO stores (id, name, user_id, created_at) VALUES ($1, $2, $3, $4)",
        id,
        name,
        user_id,
        day(1)
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_category(pool: &PgPool, id: &str, store_id: &str, name: &str) {
    sqlx::query!(
        "INSERT INTO categories (id, store_id, name) VALUES ($1, $2, $3)",
        id,
        store_id,
        name
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_service(pool: &PgPool, id: &str, store_id: &str, name: &str) {
    sqlx::query!(
        r#"
        INSERT INTO services (id, store_id, category_id, name, price, "time", is_featured, created_at)
        VALUES ($1, $2, 'c1', $3, $4, 15, TRUE, $5)
        "#,
        id,
        store_id,
        name,
        Decimal::new(1500, 2),
        day(2)
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_image(pool: &PgPool, service_id: &str, url: &str) {
    sqlx::query!(
        "INSERT INTO images (service_id, url, created_at) VALUES ($1, $2, $3)",
        service_id,
        url,
        day(2)
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_employee(
    pool: &PgPool,
    id: &str,
    store_id: &str,
    name: &str,
    created_at: DateTime<Utc>,
) {
    sqlx::query!(
        "INSERT INTO employees (id, store_id, name, created_at) VALUES ($1, $2, $3, $4)",
        id,
        store_id,
        name,
        created_at
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Seeds two stores, a category, one service with two images and three
/// employees.
///
/// - `s1` ("Main Street") owned by [`OWNER_ID`], `s2` ("Uptown") owned by
///   [`STRANGER_ID`]
/// - `svc_1` "Beard trim" in `s1`, images `old-1` and `old-2`
/// - `svc_2` "Shave" in `s2`
/// - employees `e1` Ann, `e2` Bob, `e3` Cleo in `s1`, oldest first
pub async fn seed(pool: &PgPool) {
    create_test_store(pool, "s1", "Main Street", OWNER_ID).await;
    create_test_store(pool, "s2", "Uptown", STRANGER_ID).await;
    create_test_category(pool, "c1", "s1", "Hair").await;

    create_test_service(pool, "svc_1", "s1", "Beard trim").await;
    create_test_service(pool, "svc_2", "s2", "Shave").await;
    create_test_image(pool, "svc_1", "old-1").await;
    create_test_image(pool, "svc_1", "old-2").await;

    for (i, (id, name)) in [("e1", "Ann"), ("e2", "Bob"), ("e3", "Cleo")]
        .into_iter()
        .enumerate()
    {
        create_test_employee(pool, id, "s1", name, day(3) + Duration::days(i as i64)).await;
    }
}

/// Seeds the database and builds application state over it, with tokens
/// registered for the owner and a stranger.
pub async fn create_test_state(pool: PgPool) -> AppState {
    seed(&pool).await;

    let state = build_state(pool, "test-signing-secret".to_string());
    state
        .auth_service
        .register_token(OWNER_ID, "owner", OWNER_TOKEN)
        .await
        .unwrap();
    state
        .auth_service
        .register_token(STRANGER_ID, "stranger", STRANGER_TOKEN)
        .await
        .unwrap();

    state
}

pub async fn get_service(pool: &PgPool, id: &str) -> Option<Service> {
    sqlx::query_as!(
        Service,
        r#"
        SELECT id, store_id, category_id, name, price, "time", is_featured, is_archived,
               created_at, updated_at
        FROM services
        WHERE id = $1
        "#,
        id
    )
    .fetch_optional(pool)
    .await
    .unwrap()
}

pub async fn get_image_urls(pool: &PgPool, service_id: &str) -> Vec<String> {
    sqlx::query_scalar!(
        "SELECT url FROM images WHERE service_id = $1 ORDER BY created_at, url",
        service_id
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

pub async fn count_services(pool: &PgPool) -> i64 {
    sqlx::query_scalar!(r#"SELECT COUNT(*) AS "count!" FROM services"#)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
