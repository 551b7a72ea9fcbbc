//! Integration tests for reservation endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_gift, get_gift, get_request, json_request, reserve, reserve_as, send, test_app,
};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_reserve_until_exhausted() {
    let app = test_app();
    let gift = create_test_gift(&app, "Headphones", 2).await;
    let id = gift["id"].as_str().unwrap();

    let (_, view) = get_gift(&app, id).await;
    assert_eq!(view["availableQuantity"], 2);

    let (status, alice) = reserve_as(&app, id, "Alice", 2).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(alice["giftId"], id);
    assert_eq!(alice["reservedBy"], "Alice");
    assert_eq!(alice["quantity"], 2);
    assert!(Uuid::parse_str(alice["id"].as_str().unwrap()).is_ok());
    assert!(alice["createdAt"].is_string());

    let (_, view) = get_gift(&app, id).await;
    assert_eq!(view["availableQuantity"], 0);
    assert_eq!(view["reservedQuantity"], 2);

    let (status, body) = reserve_as(&app, id, "Bob", 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only 0 units available for reservation");

    let (_, all) = send(&app, get_request("/api/reservations")).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_reserve_more_than_available_reports_remaining() {
    let app = test_app();
    let gift = create_test_gift(&app, "Plates", 5).await;
    let id = gift["id"].as_str().unwrap();
    reserve(&app, id, 2).await;

    let (status, body) = reserve(&app, id, 4).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only 3 units available for reservation");

    let (_, view) = get_gift(&app, id).await;
    assert_eq!(view["reservedQuantity"], 2);
}

#[tokio::test]
async fn test_reserve_defaults_quantity_and_trims_name() {
    let app = test_app();
    let gift = create_test_gift(&app, "Vase", 3).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/reservations",
            json!({ "giftId": gift["id"], "reservedBy": "  Carol  " }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["reservedBy"], "Carol");
}

#[tokio::test]
async fn test_reserve_unknown_gift() {
    let app = test_app();

    let (status, body) = reserve(&app, &Uuid::new_v4().to_string(), 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = reserve(&app, "not-a-uuid", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, get_request("/api/reservations")).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_reserve_invalid_body() {
    let app = test_app();
    let gift = create_test_gift(&app, "Vase", 3).await;
    let id = gift["id"].as_str().unwrap();

    let (status, body) = reserve_as(&app, id, "   ", 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "reservedBy");

    let (status, body) = reserve_as(&app, id, "Dave", 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "quantity");

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/reservations", json!({ "reservedBy": "Eve" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, view) = get_gift(&app, id).await;
    assert_eq!(view["reservedQuantity"], 0);
}

#[tokio::test]
async fn test_list_reservations_in_creation_order() {
    let app = test_app();
    let mug = create_test_gift(&app, "Mug", 5).await;
    let lamp = create_test_gift(&app, "Lamp", 5).await;

    reserve_as(&app, mug["id"].as_str().unwrap(), "Alice", 1).await;
    reserve_as(&app, lamp["id"].as_str().unwrap(), "Bob", 2).await;
    reserve_as(&app, mug["id"].as_str().unwrap(), "Carol", 3).await;

    let (status, body) = send(&app, get_request("/api/reservations")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["reservedBy"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reservations_never_oversell() {
    let app = test_app();
    let gift = create_test_gift(&app, "Limited edition", 5).await;
    let id = gift["id"].as_str().unwrap().to_string();

    let handles: Vec<_> = (0..40)
        .map(|_| {
            let app = app.clone();
            let id = id.clone();
            tokio::spawn(async move { reserve(&app, &id, 1).await.0 })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("Unexpected status {}", other),
        }
    }

    assert_eq!(created, 5);
    assert_eq!(rejected, 35);

    let (_, view) = get_gift(&app, &id).await;
    assert_eq!(view["reservedQuantity"], 5);
    assert_eq!(view["availableQuantity"], 0);
}
