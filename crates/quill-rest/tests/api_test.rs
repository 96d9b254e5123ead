//! Router tests against the in-memory store and cache.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use quill_config::ServerConfig;
use quill_repository::InMemoryStore;
use quill_rest::{create_router, AppState};
use quill_service::{InMemoryCache, PostServiceComponent, UserServiceComponent};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const TTL: Duration = Duration::from_secs(300);

struct TestApp {
    router: Router,
    store: InMemoryStore,
    cache: InMemoryCache,
}

fn app() -> TestApp {
    let store = InMemoryStore::new();
    let cache = InMemoryCache::new();

    let user_service = UserServiceComponent::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(cache.clone()),
        TTL,
    );
    let post_service =
        PostServiceComponent::new(Arc::new(store.clone()), Arc::new(cache.clone()), TTL);

    let state = AppState::new(Arc::new(user_service), Arc::new(post_service));
    let router = create_router(state, &ServerConfig::default());

    TestApp {
        router,
        store,
        cache,
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_post_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts",
            json!({ "title": "A", "content": "B", "user_id": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_u64().unwrap();

    let (status, body) = send(&app, empty_request("GET", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "id": id, "title": "A", "content": "B", "user_id": 1 }));

    let (status, body) = send(
        &app,
        json_request("PATCH", &format!("/api/v1/posts/{id}"), json!({ "title": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "C");
    assert_eq!(body["data"]["content"], "B");

    let (status, body) = send(&app, empty_request("GET", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "C");

    let (status, _) = send(&app, empty_request("DELETE", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, empty_request("GET", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_put_replaces_every_post_field() {
    let app = app();
    let (_, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts",
            json!({ "title": "A", "content": "B", "user_id": 1 }),
        ),
    )
    .await;
    let id = body["data"]["id"].as_u64().unwrap();

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/v1/posts/{id}"),
            json!({ "title": "X", "content": "Y", "user_id": 2 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "id": id, "title": "X", "content": "Y", "user_id": 2 }));
}

#[tokio::test]
async fn test_patch_missing_post_is_not_found() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request("PATCH", "/api/v1/posts/99", json!({ "title": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.post_count(), 0);
}

#[tokio::test]
async fn test_batch_create_shares_owner() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts/batch",
            json!({
                "user_id": 3,
                "posts": [
                    { "title": "one", "content": "1" },
                    { "title": "two", "content": "2" }
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let posts = body["data"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["user_id"] == 3));
    assert_eq!(app.store.post_count(), 2);
}

#[tokio::test]
async fn test_batch_with_invalid_item_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts/batch",
            json!({
                "user_id": 3,
                "posts": [
                    { "title": "one", "content": "1" },
                    { "title": "", "content": "2" }
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"][0]["field"], "posts[1].title");
    assert_eq!(app.store.post_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/api/v1/users/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_user_delete_cascades_over_http() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/api/v1/users", json!({ "name": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id = body["data"]["id"].as_u64().unwrap();

    send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts/batch",
            json!({
                "user_id": user_id,
                "posts": [{ "title": "t", "content": "c" }]
            }),
        ),
    )
    .await;
    let (_, body) = send(&app, empty_request("GET", "/api/v1/posts")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        empty_request("DELETE", &format!("/api/v1/users/{user_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "deleted successfully");

    let (_, body) = send(&app, empty_request("GET", "/api/v1/posts")).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(app.store.user_count(), 0);
}

#[tokio::test]
async fn test_user_update_then_get() {
    let app = app();
    let (_, body) = send(
        &app,
        json_request("POST", "/api/v1/users", json!({ "name": "alice" })),
    )
    .await;
    let user_id = body["data"]["id"].as_u64().unwrap();
    send(&app, empty_request("GET", &format!("/api/v1/users/{user_id}"))).await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/v1/users/{user_id}"),
            json!({ "name": "alicia" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "update successfully");

    let (_, body) = send(&app, empty_request("GET", &format!("/api/v1/users/{user_id}"))).await;
    assert_eq!(body["data"]["name"], "alicia");
}

#[tokio::test]
async fn test_cache_outage_is_invisible_over_http() {
    let app = app();
    app.cache.set_unavailable(true);

    let (status, _) = send(
        &app,
        json_request("POST", "/api/v1/users", json!({ "name": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, empty_request("GET", "/api/v1/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_outage_is_internal_error() {
    let app = app();
    app.store.set_unavailable(true);

    let (status, body) = send(&app, empty_request("GET", "/api/v1/posts")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    for uri in ["/health", "/ready", "/live"] {
        let (status, _) = send(&app, empty_request("GET", uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}
