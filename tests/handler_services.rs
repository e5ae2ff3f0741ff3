mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{OWNER_TOKEN, STRANGER_TOKEN};
use serde_json::{Value, json};
use sqlx::PgPool;
use store_admin::routes::base_routes;

/// Build a test server over the full router, seeded by
/// [`common::create_test_state`].
async fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool).await;
    let app = base_routes(state.clone()).with_state(state);
    TestServer::new(app).unwrap()
}

fn haircut() -> Value {
    json!({
        "name": "Haircut",
        "price": 20,
        "time": 30,
        "categoryId": "c1",
        "images": [{ "url": "u1" }]
    })
}

fn without(field: &str) -> Value {
    let mut body = haircut();
    body.as_object_mut().unwrap().remove(field);
    body
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_service_with_relations(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server.get("/api/s1/services/svc_1").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], "svc_1");
    assert_eq!(json["name"], "Beard trim");
    assert_eq!(json["storeId"], "s1");
    assert_eq!(json["images"].as_array().unwrap().len(), 2);
    assert_eq!(json["category"]["name"], "Hair");
}

#[sqlx::test]
async fn test_get_unknown_service_is_null(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server.get("/api/s1/services/missing").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[sqlx::test]
async fn test_get_blank_service_id(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server.get("/api/s1/services/%20").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Service id is required");
}

#[sqlx::test]
async fn test_get_needs_no_identity(pool: PgPool) {
    let server = make_server(pool).await;

    server
        .get("/api/s2/services/svc_2")
        .await
        .assert_status_ok();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_service_success(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .delete("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], "svc_1");
    assert_eq!(json["name"], "Beard trim");
    assert!(common::get_service(&pool, "svc_1").await.is_none());
    assert!(common::get_image_urls(&pool, "svc_1").await.is_empty());
}

#[sqlx::test]
async fn test_delete_without_identity(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server.delete("/api/s1/services/svc_1").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.text(), "Unauthenticated");
    assert!(common::get_service(&pool, "svc_1").await.is_some());
}

#[sqlx::test]
async fn test_delete_unknown_token_is_unauthenticated(pool: PgPool) {
    let server = make_server(pool).await;

    server
        .delete("/api/s1/services/svc_1")
        .authorization_bearer("not-a-token")
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_delete_identity_checked_before_id(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server.delete("/api/s1/services/%20").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(common::count_services(&pool).await, 2);
}

#[sqlx::test]
async fn test_delete_blank_service_id(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .delete("/api/s1/services/%20")
        .authorization_bearer(OWNER_TOKEN)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Service id is required");
    assert_eq!(common::count_services(&pool).await, 2);
}

#[sqlx::test]
async fn test_delete_in_foreign_store(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .delete("/api/s1/services/svc_1")
        .authorization_bearer(STRANGER_TOKEN)
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Unauthorized");
    assert!(common::get_service(&pool, "svc_1").await.is_some());
    assert_eq!(common::get_image_urls(&pool, "svc_1").await.len(), 2);
}

#[sqlx::test]
async fn test_delete_service_of_another_store(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    // svc_2 lives in s2; the caller owns s1.
    let response = server
        .delete("/api/s1/services/svc_2")
        .authorization_bearer(OWNER_TOKEN)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Service not found");
    assert!(common::get_service(&pool, "svc_2").await.is_some());
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_patch_replaces_images(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Haircut");
    assert_eq!(json["time"], 30);
    assert_eq!(json["categoryId"], "c1");

    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["url"], "u1");
    assert_eq!(common::get_image_urls(&pool, "svc_1").await, vec!["u1".to_string()]);
}

#[sqlx::test]
async fn test_patch_keeps_flags_when_omitted(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await
        .assert_status_ok();
    assert!(common::get_service(&pool, "svc_1").await.unwrap().is_featured);

    let mut body = haircut();
    body["isFeatured"] = json!(false);
    body["isArchived"] = json!(true);

    server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .json(&body)
        .await
        .assert_status_ok();

    let service = common::get_service(&pool, "svc_1").await.unwrap();
    assert!(!service.is_featured);
    assert!(service.is_archived);
}

#[sqlx::test]
async fn test_patch_accepts_cookie_identity(pool: PgPool) {
    let server = make_server(pool).await;

    server
        .patch("/api/s1/services/svc_1")
        .add_header("Cookie", format!("theme=dark; auth_token={OWNER_TOKEN}"))
        .json(&haircut())
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_patch_without_identity_before_validation(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .patch("/api/s1/services/svc_1")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.text(), "Unauthenticated");
    assert_eq!(
        common::get_service(&pool, "svc_1").await.unwrap().name,
        "Beard trim"
    );
}

#[sqlx::test]
async fn test_patch_required_fields_in_order(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let cases = [
        (json!({}), "Name is required"),
        (without("name"), "Name is required"),
        (without("time"), "Time is required"),
        (without("images"), "Images are required"),
        (without("price"), "Price is required"),
        (without("categoryId"), "Category id is required"),
        (
            json!({ "name": "Haircut", "price": 20 }),
            "Time is required",
        ),
    ];

    for (body, message) in cases {
        let response = server
            .patch("/api/s1/services/svc_1")
            .authorization_bearer(OWNER_TOKEN)
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), message, "body: {body}");
    }

    assert_eq!(
        common::get_service(&pool, "svc_1").await.unwrap().name,
        "Beard trim"
    );
    assert_eq!(common::get_image_urls(&pool, "svc_1").await.len(), 2);
}

#[sqlx::test]
async fn test_patch_falsy_values_count_as_missing(pool: PgPool) {
    let server = make_server(pool).await;

    let cases = [
        ("name", json!(""), "Name is required"),
        ("time", json!(0), "Time is required"),
        ("images", json!([]), "Images are required"),
        ("price", json!(0), "Price is required"),
        ("categoryId", json!(null), "Category id is required"),
    ];

    for (field, value, message) in cases {
        let mut body = haircut();
        body[field] = value;

        let response = server
            .patch("/api/s1/services/svc_1")
            .authorization_bearer(OWNER_TOKEN)
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), message);
    }
}

#[sqlx::test]
async fn test_patch_whitespace_name_counts_as_present(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    common::create_test_category(&pool, " ", "s1", "Blank").await;

    let response = server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .json(&json!({
            "name": "   ",
            "time": 30,
            "images": [{ "url": "u1" }],
            "price": 20,
            "categoryId": " "
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "   ");
    assert_eq!(json["categoryId"], " ");
    assert_eq!(common::get_image_urls(&pool, "svc_1").await, vec!["u1".to_string()]);
}

#[sqlx::test]
async fn test_patch_time_as_string(pool: PgPool) {
    let server = make_server(pool).await;

    let mut body = haircut();
    body["time"] = json!("45");

    let response = server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .json(&body)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["time"], 45);
}

#[sqlx::test]
async fn test_patch_malformed_body(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .text("name=Haircut")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid request body");
}

#[sqlx::test]
async fn test_patch_blank_service_id(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server
        .patch("/api/s1/services/%20")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Service id is required");
}

#[sqlx::test]
async fn test_patch_in_foreign_store(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(STRANGER_TOKEN)
        .json(&haircut())
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Unauthorized");

    let service = common::get_service(&pool, "svc_1").await.unwrap();
    assert_eq!(service.name, "Beard trim");
    assert_eq!(common::get_image_urls(&pool, "svc_1").await.len(), 2);
}

#[sqlx::test]
async fn test_patch_unknown_service(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server
        .patch("/api/s1/services/missing")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Service not found");
}

// ─── Collection ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_service(pool: PgPool) {
    let server = make_server(pool.clone()).await;

    let response = server
        .post("/api/s1/services")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["storeId"], "s1");
    assert_eq!(json["isFeatured"], false);
    assert_eq!(json["isArchived"], false);

    let id = json["id"].as_str().unwrap();
    assert_eq!(common::get_image_urls(&pool, id).await, vec!["u1".to_string()]);
}

#[sqlx::test]
async fn test_create_in_foreign_store_creates_nothing(pool: PgPool) {
    let server = make_server(pool.clone()).await;
    let before = common::count_services(&pool).await;

    let response = server
        .post("/api/s2/services")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(common::count_services(&pool).await, before);
}

#[sqlx::test]
async fn test_create_without_identity(pool: PgPool) {
    let server = make_server(pool).await;

    server
        .post("/api/s1/services")
        .json(&haircut())
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_list_services_filters(pool: PgPool) {
    let server = make_server(pool).await;

    server
        .post("/api/s1/services")
        .authorization_bearer(OWNER_TOKEN)
        .json(&haircut())
        .await
        .assert_status_ok();

    let all = server.get("/api/s1/services").await.json::<Value>();
    assert_eq!(all.as_array().unwrap().len(), 2);

    let featured = server
        .get("/api/s1/services")
        .add_query_param("isFeatured", "true")
        .await
        .json::<Value>();
    let featured = featured.as_array().unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["id"], "svc_1");
}

#[sqlx::test]
async fn test_list_hides_archived(pool: PgPool) {
    let server = make_server(pool).await;

    let mut body = haircut();
    body["isArchived"] = json!(true);
    server
        .patch("/api/s1/services/svc_1")
        .authorization_bearer(OWNER_TOKEN)
        .json(&body)
        .await
        .assert_status_ok();

    let list = server.get("/api/s1/services").await.json::<Value>();
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_list_blank_store_id(pool: PgPool) {
    let server = make_server(pool).await;

    let response = server.get("/api/%20/services").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Store id is required");
}
