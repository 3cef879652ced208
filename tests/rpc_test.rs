//! Drives the `order.v1.OrderService` procedures through actix-web with an
//! in-memory store double, so no database is needed.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use order_rpc::domain::errors::StoreError;
use order_rpc::domain::order::Order;
use order_rpc::handlers::orders::configure;
use order_rpc::infrastructure::MockOrderStore;
use order_rpc::{OrderService, OrderStore};
use serde_json::{json, Value};

/// A mock that behaves like a real store: creates are kept, gets look them
/// up, lists return newest first.
fn stateful_store() -> MockOrderStore {
    let orders = Arc::new(Mutex::new(Vec::<Order>::new()));
    let on_create = orders.clone();
    let on_get = orders.clone();
    let on_list = orders;

    MockOrderStore::new()
        .on_create(move |o| {
            on_create.lock().unwrap().push(o.clone());
            Ok(())
        })
        .on_get(move |id| {
            on_get
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or(StoreError::NotFound)
        })
        .on_list(move || {
            let mut all = on_list.lock().unwrap().clone();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        })
}

macro_rules! app {
    ($store:expr) => {{
        let store: Arc<dyn OrderStore> = $store;
        test::init_service(
            App::new()
                .app_data(web::Data::new(OrderService::new(store)))
                .configure(configure),
        )
        .await
    }};
}

macro_rules! call {
    ($app:expr, $method:literal, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri(concat!("/order.v1.OrderService/", $method))
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn create_get_and_check_owner_scenario() {
    let app = app!(Arc::new(stateful_store()));

    let (status, body) = call!(
        app,
        "CreateOrder",
        json!({ "userId": "user-123", "item": "Test Item", "amount": 99.99 })
    );
    assert_eq!(status, StatusCode::OK);
    let order = &body["order"];
    let id = order["id"].as_str().expect("id should be a string").to_string();
    assert!(!id.is_empty());
    assert_eq!(order["userId"], "user-123");
    assert_eq!(order["item"], "Test Item");
    assert_eq!(order["amount"], 99.99);
    assert_eq!(order["status"], "NEW");
    assert!(order["createdAt"].as_str().unwrap().ends_with('Z'));

    let (status, body) = call!(app, "GetOrder", json!({ "id": id }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"], *order);

    let (status, body) = call!(
        app,
        "CheckOrderOwner",
        json!({ "orderId": id, "userId": "user-123" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = call!(
        app,
        "CheckOrderOwner",
        json!({ "orderId": id, "userId": "someone-else" })
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "permission_denied");
    assert_eq!(body["message"], "order does not belong to user");
}

#[actix_web::test]
async fn create_rejects_invalid_input_without_touching_store() {
    let store = Arc::new(MockOrderStore::new());
    let app = app!(store.clone());

    for body in [
        json!({ "userId": "", "item": "Widget", "amount": 1.0 }),
        json!({ "userId": "u1", "item": "", "amount": 1.0 }),
        json!({ "userId": "u1", "item": "Widget", "amount": 0 }),
        json!({ "userId": "u1", "item": "Widget", "amount": -3.5 }),
        json!({ "item": "Widget", "amount": 1.0 }),
    ] {
        let (status, resp) = call!(app, "CreateOrder", body);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["code"], "invalid_argument");
    }

    assert_eq!(store.create_calls(), 0);
}

#[actix_web::test]
async fn malformed_body_is_invalid_argument() {
    let app = app!(Arc::new(MockOrderStore::new()));

    let (status, body) = call!(app, "CreateOrder", json!({ "amount": "lots" }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_argument");
}

#[actix_web::test]
async fn get_unknown_order_is_not_found() {
    let app = app!(Arc::new(stateful_store()));

    let (status, body) = call!(app, "GetOrder", json!({ "id": "does-not-exist" }));

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn get_with_empty_id_is_invalid_argument() {
    let store = Arc::new(MockOrderStore::new());
    let app = app!(store.clone());

    let (status, body) = call!(app, "GetOrder", json!({ "id": "" }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_argument");
    assert_eq!(store.get_calls(), 0);
}

#[actix_web::test]
async fn storage_failure_is_internal_without_details() {
    let app = app!(Arc::new(MockOrderStore::new().on_get(|_| {
        Err(StoreError::Internal("password authentication failed".to_string()))
    })));

    let (status, body) = call!(app, "GetOrder", json!({ "id": "order-1" }));

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal");
    assert!(!body["message"].as_str().unwrap().contains("password"));
}

#[actix_web::test]
async fn list_on_empty_store_is_empty() {
    let app = app!(Arc::new(MockOrderStore::new()));

    let (status, body) = call!(app, "ListOrders", json!({}));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orders"], json!([]));
}

#[actix_web::test]
async fn list_accepts_an_empty_body() {
    let app = app!(Arc::new(MockOrderStore::new()));

    let req = test::TestRequest::post()
        .uri("/order.v1.OrderService/ListOrders")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn list_with_malformed_body_is_invalid_argument() {
    let store = Arc::new(MockOrderStore::new());
    let app = app!(store.clone());

    let req = test::TestRequest::post()
        .uri("/order.v1.OrderService/ListOrders")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_argument");
    assert_eq!(store.list_calls(), 0);
}

#[actix_web::test]
async fn create_rejects_sub_cent_amount() {
    let store = Arc::new(MockOrderStore::new());
    let app = app!(store.clone());

    let (status, body) = call!(
        app,
        "CreateOrder",
        json!({ "userId": "u1", "item": "Widget", "amount": 0.004 })
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_argument");
    assert_eq!(store.create_calls(), 0);
}

#[actix_web::test]
async fn list_returns_created_orders_newest_first() {
    let app = app!(Arc::new(stateful_store()));

    let mut ids = Vec::new();
    for item in ["first", "second", "third"] {
        let (_, body) = call!(
            app,
            "CreateOrder",
            json!({ "userId": "u1", "item": item, "amount": 5.0 })
        );
        ids.push(body["order"]["id"].as_str().unwrap().to_string());
        // Keep creation timestamps strictly increasing.
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    let (status, body) = call!(app, "ListOrders", json!({}));

    assert_eq!(status, StatusCode::OK);
    let listed: Vec<&str> = body["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[actix_web::test]
async fn check_owner_on_missing_order_is_not_found() {
    let app = app!(Arc::new(stateful_store()));

    let (status, body) = call!(
        app,
        "CheckOrderOwner",
        json!({ "orderId": "missing", "userId": "u1" })
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn check_owner_with_missing_fields_is_invalid_argument() {
    let store = Arc::new(MockOrderStore::new());
    let app = app!(store.clone());

    let (status, body) = call!(app, "CheckOrderOwner", json!({ "orderId": "order-1" }));

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_argument");
    assert_eq!(store.get_calls(), 0);
}
