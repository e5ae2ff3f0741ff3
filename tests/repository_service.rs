use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use store_admin::domain::entities::{NewImage, ServiceFilter, ServiceInput, StoreScope};
use store_admin::domain::repositories::ServiceRepository;
use store_admin::error::AppError;
use store_admin::infrastructure::persistence::PgServiceRepository;

async fn seed_store(pool: &PgPool, store_id: &str, user_id: &str) {
    sqlx::query!(
        "INSERT INTO stores (id, name, user_id) VALUES ($1, $2, $3)",
        store_id,
        format!("Store {store_id}"),
        user_id
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query!(
        "INSERT INTO categories (id, store_id, name) VALUES ($1, $2, 'Hair')",
        format!("cat_{store_id}"),
        store_id
    )
    .execute(pool)
    .await
    .unwrap();
}

fn input(category_id: &str, urls: &[&str]) -> ServiceInput {
    ServiceInput {
        name: "Haircut".to_string(),
        price: Decimal::new(20, 0),
        time: 30,
        category_id: category_id.to_string(),
        images: urls
            .iter()
            .map(|u| NewImage { url: u.to_string() })
            .collect(),
        is_featured: None,
        is_archived: None,
    }
}

fn scope(store_id: &str, user_id: &str) -> StoreScope {
    StoreScope::new(store_id, user_id)
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool));

    let created = repo
        .create(&scope("s1", "user_1"), input("cat_s1", &["a", "b"]))
        .await
        .unwrap();

    assert!(!created.service.is_featured);
    assert_eq!(created.images.len(), 2);

    let found = repo.find_by_id(&created.service.id).await.unwrap().unwrap();
    assert_eq!(found.service.name, "Haircut");
    assert_eq!(found.category.unwrap().name, "Hair");
}

#[sqlx::test]
async fn test_find_unknown_is_none(pool: PgPool) {
    let repo = PgServiceRepository::new(Arc::new(pool));

    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_replaces_images(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool));
    let owner = scope("s1", "user_1");

    let created = repo
        .create(&owner, input("cat_s1", &["old-1", "old-2"]))
        .await
        .unwrap();

    let updated = repo
        .update(&owner, &created.service.id, input("cat_s1", &["u1"]))
        .await
        .unwrap();

    let urls: Vec<&str> = updated.images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["u1"]);
}

#[sqlx::test]
async fn test_update_keeps_omitted_flags(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool));
    let owner = scope("s1", "user_1");

    let mut featured = input("cat_s1", &["a"]);
    featured.is_featured = Some(true);
    let created = repo.create(&owner, featured).await.unwrap();

    let updated = repo
        .update(&owner, &created.service.id, input("cat_s1", &["a"]))
        .await
        .unwrap();

    assert!(updated.service.is_featured);
    assert!(!updated.service.is_archived);
}

#[sqlx::test]
async fn test_foreign_store_is_rejected_without_writes(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool.clone()));

    let created = repo
        .create(&scope("s1", "user_1"), input("cat_s1", &["keep"]))
        .await
        .unwrap();
    let id = created.service.id;
    let stranger = scope("s1", "user_2");

    let update = repo.update(&stranger, &id, input("cat_s1", &["x"])).await;
    assert!(matches!(update, Err(AppError::StoreNotOwned)));

    let delete = repo.delete(&stranger, &id).await;
    assert!(matches!(delete, Err(AppError::StoreNotOwned)));

    let create = repo.create(&stranger, input("cat_s1", &["x"])).await;
    assert!(matches!(create, Err(AppError::StoreNotOwned)));

    let found = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.images.len(), 1);
    assert_eq!(found.images[0].url, "keep");

    let count = sqlx::query_scalar!(r#"SELECT COUNT(*) AS "count!" FROM services"#)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_service_of_other_store_is_not_found(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    seed_store(&pool, "s2", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool));

    let in_s2 = repo
        .create(&scope("s2", "user_1"), input("cat_s2", &["a"]))
        .await
        .unwrap();

    let result = repo.delete(&scope("s1", "user_1"), &in_s2.service.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test]
async fn test_delete_returns_record_and_cascades(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool.clone()));
    let owner = scope("s1", "user_1");

    let created = repo
        .create(&owner, input("cat_s1", &["a"]))
        .await
        .unwrap();

    let deleted = repo.delete(&owner, &created.service.id).await.unwrap();
    assert_eq!(deleted.id, created.service.id);

    let images = sqlx::query_scalar!(r#"SELECT COUNT(*) AS "count!" FROM images"#)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(images, 0);
}

#[sqlx::test]
async fn test_list_filters(pool: PgPool) {
    seed_store(&pool, "s1", "user_1").await;
    let repo = PgServiceRepository::new(Arc::new(pool));
    let owner = scope("s1", "user_1");

    let mut featured = input("cat_s1", &["a"]);
    featured.is_featured = Some(true);
    repo.create(&owner, featured).await.unwrap();

    let mut archived = input("cat_s1", &["b"]);
    archived.is_archived = Some(true);
    repo.create(&owner, archived).await.unwrap();

    repo.create(&owner, input("cat_s1", &["c"])).await.unwrap();

    let all = repo.list("s1", ServiceFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let only_featured = repo
        .list(
            "s1",
            ServiceFilter {
                is_featured: Some(true),
                ..ServiceFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(only_featured.len(), 1);
    assert_eq!(only_featured[0].images[0].url, "a");

    let same_category = repo
        .list(
            "s1",
            ServiceFilter {
                category_id: Some("cat_s1".to_string()),
                ..ServiceFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same_category.len(), 2);

    let other_category = repo
        .list(
            "s1",
            ServiceFilter {
                category_id: Some("cat_other".to_string()),
                is_featured: None,
            },
        )
        .await
        .unwrap();
    assert!(other_category.is_empty());
}
