// ==========================
// backend-lib/tests/nas.rs
// ==========================
//! NAS registry service behavior.

mod common;

use common::test_pool;
use radvault_backend_lib::error::AppError;
use radvault_backend_lib::nas::NasService;
use radvault_common::{CreateNasRequest, NasFilter, Patch, UpdateNasRequest};

fn create_request(nasname: &str) -> CreateNasRequest {
    CreateNasRequest {
        nasname: nasname.to_string(),
        shortname: None,
        nas_type: None,
        ports: None,
        secret: "s3cret".to_string(),
        server: None,
        community: None,
        description: None,
        require_ma: None,
        limit_proxy_state: None,
    }
}

#[tokio::test]
async fn create_applies_schema_defaults() {
    let pool = test_pool().await;
    let service = NasService::new(pool);

    let resp = service.create(create_request("192.168.1.1")).await.unwrap();

    assert!(resp.id > 0);
    assert_eq!(resp.nasname, "192.168.1.1");
    assert_eq!(resp.nas_type, "other");
    assert_eq!(resp.ports, 0);
    assert_eq!(resp.description, "RADIUS Client");
    assert_eq!(resp.require_ma, "auto");
    assert_eq!(resp.limit_proxy_state, "auto");
    assert!(!resp.created_at.is_empty());
}

#[tokio::test]
async fn create_honors_explicit_fields() {
    let pool = test_pool().await;
    let service = NasService::new(pool);

    let mut req = create_request("10.0.0.1");
    req.shortname = Some("core-sw".to_string());
    req.nas_type = Some("cisco".to_string());
    req.ports = Some(48);

    let resp = service.create(req).await.unwrap();
    assert_eq!(resp.shortname, "core-sw");
    assert_eq!(resp.nas_type, "cisco");
    assert_eq!(resp.ports, 48);
}

#[tokio::test]
async fn create_rejects_duplicate_nasname() {
    let pool = test_pool().await;
    let service = NasService::new(pool.clone());

    service.create(create_request("10.0.0.2")).await.unwrap();
    let err = service.create(create_request("10.0.0.2")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "nasname already exists");

    // The failed create inserted nothing.
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM nas WHERE nasname = '10.0.0.2'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let pool = test_pool().await;
    let service = NasService::new(pool);

    let err = service.get(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "nas not found");
}

#[tokio::test]
async fn list_filters_and_clamps_pagination() {
    let pool = test_pool().await;
    let service = NasService::new(pool);

    for i in 0..12 {
        let mut req = create_request(&format!("10.1.0.{i}"));
        req.shortname = Some(format!("edge-{i}"));
        service.create(req).await.unwrap();
    }
    let mut other = create_request("172.16.0.1");
    other.nas_type = Some("juniper".to_string());
    service.create(other).await.unwrap();

    let page = service.list(NasFilter::default()).await.unwrap();
    assert_eq!(page.total, 13);
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.total_page, 2);

    // page=0 falls back to 1, page_size=200 is clamped to 100.
    let page = service
        .list(NasFilter {
            page: Some(0),
            page_size: Some(200),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 100);
    assert_eq!(page.data.len(), 13);

    let page = service
        .list(NasFilter {
            nasname: Some("10.1.0".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 12);

    let page = service
        .list(NasFilter {
            nas_type: Some("JUNIPER".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].nasname, "172.16.0.1");
}

#[tokio::test]
async fn update_applies_patch_semantics() {
    let pool = test_pool().await;
    let service = NasService::new(pool);

    let mut req = create_request("10.2.0.1");
    req.shortname = Some("old-name".to_string());
    let created = service.create(req).await.unwrap();

    let updated = service
        .update(
            created.id,
            UpdateNasRequest {
                ports: Patch::Set(24),
                shortname: Patch::Set(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.ports, 24);
    // Explicit clear, not "leave unchanged".
    assert_eq!(updated.shortname, "");
    // Unset fields kept their values.
    assert_eq!(updated.nasname, "10.2.0.1");
    assert_eq!(updated.secret, "s3cret");
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn delete_is_soft_and_frees_the_name() {
    let pool = test_pool().await;
    let service = NasService::new(pool.clone());

    let created = service.create(create_request("10.3.0.1")).await.unwrap();
    service.delete(created.id).await.unwrap();

    // Hidden from every public read path.
    assert!(matches!(
        service.get(created.id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    let page = service.list(NasFilter::default()).await.unwrap();
    assert_eq!(page.total, 0);

    // But the row still exists with a deletion stamp.
    let deleted: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM nas WHERE id = ? AND deleted_at IS NOT NULL")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(deleted, 1);

    // A second delete is NotFound, and the name can be reused.
    assert!(matches!(
        service.delete(created.id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    service.create(create_request("10.3.0.1")).await.unwrap();
}

#[tokio::test]
async fn create_requires_nasname_and_secret() {
    let pool = test_pool().await;
    let service = NasService::new(pool);

    let mut req = create_request("");
    req.secret = "s".to_string();
    let err = service.create(req).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.to_string(), "nasname is required");

    let mut req = create_request("10.4.0.1");
    req.secret = String::new();
    let err = service.create(req).await.unwrap_err();
    assert_eq!(err.to_string(), "secret is required");
}
