//! Full create/read/update/delete walk-through.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use super::{call, test_app};

#[tokio::test]
async fn test_startup_lists_seed_data() {
    let app = test_app();

    let (status, body) = call(&app, Method::GET, "/snippets", None).await;
    assert_eq!(status, StatusCode::OK);

    let snippets = body.as_array().unwrap();
    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0]["id"], 1);
    assert_eq!(snippets[0]["title"], "Hello World (Go)");
    assert_eq!(snippets[0]["description"], "A simple Go program.");
    assert_eq!(snippets[1]["id"], 2);
    assert_eq!(snippets[1]["title"], "React Component Example");
}

#[tokio::test]
async fn test_crud_scenario() {
    let app = test_app();

    let (status, created) = call(
        &app,
        Method::POST,
        "/snippets",
        Some(json!({"title": "t", "code": "c", "description": "d"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 3, "title": "t", "code": "c", "description": "d"}));

    let (status, fetched) = call(&app, Method::GET, "/snippets/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/snippets/3",
        Some(json!({"title": "t2", "code": "c2", "description": "d2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 3, "title": "t2", "code": "c2", "description": "d2"}));

    let (status, deleted) = call(&app, Method::DELETE, "/snippets/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"message": "Snippet deleted successfully"}));

    let (status, missing) = call(&app, Method::GET, "/snippets/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({"error": "Snippet not found"}));
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = test_app();

    let (status, created) = call(
        &app,
        Method::POST,
        "/snippets",
        Some(json!({"id": 1, "title": "dup?", "code": "", "description": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);

    let (_, first) = call(&app, Method::GET, "/snippets/1", None).await;
    assert_eq!(first["title"], "Hello World (Go)");
}

#[tokio::test]
async fn test_update_forces_path_id() {
    let app = test_app();

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/snippets/2",
        Some(json!({"id": 50, "title": "new"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 2, "title": "new", "code": "", "description": ""}));

    let (status, _) = call(&app, Method::GET, "/snippets/50", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_keeps_order_and_is_not_repeatable() {
    let app = test_app();
    for title in ["a", "b"] {
        call(&app, Method::POST, "/snippets", Some(json!({"title": title}))).await;
    }

    let (status, _) = call(&app, Method::DELETE, "/snippets/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = call(&app, Method::GET, "/snippets", None).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 4]);

    let (status, body) = call(&app, Method::DELETE, "/snippets/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Snippet not found");
}

#[tokio::test]
async fn test_ids_not_reused_after_deleting_newest() {
    let app = test_app();

    let (_, created) = call(&app, Method::POST, "/snippets", Some(json!({}))).await;
    assert_eq!(created["id"], 3);
    call(&app, Method::DELETE, "/snippets/3", None).await;

    let (_, next) = call(&app, Method::POST, "/snippets", Some(json!({}))).await;
    assert_eq!(next["id"], 4);
}

#[tokio::test]
async fn test_invalid_id_is_never_not_found() {
    let app = test_app();

    for uri in ["/snippets/abc", "/snippets/1.0", "/snippets/0x1"] {
        let (status, body) = call(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Invalid ID format");
    }
}

#[tokio::test]
async fn test_non_integer_body_id_is_malformed() {
    let app = test_app();

    for bad_id in [json!("abc"), json!(1.5), json!([1])] {
        let payload = json!({"id": bad_id, "title": "t"});

        let (status, body) = call(&app, Method::POST, "/snippets", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "POST {payload}");
        assert!(body["error"].is_string());

        let (status, _) = call(&app, Method::PUT, "/snippets/1", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {payload}");
    }

    let (_, list) = call(&app, Method::GET, "/snippets", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    let (_, first) = call(&app, Method::GET, "/snippets/1", None).await;
    assert_eq!(first["title"], "Hello World (Go)");
}

#[tokio::test]
async fn test_null_body_creates_empty_snippet() {
    let app = test_app();

    let (status, created) = call(&app, Method::POST, "/snippets", Some(Value::Null)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 3, "title": "", "code": "", "description": ""}));

    let (status, updated) = call(&app, Method::PUT, "/snippets/1", Some(Value::Null)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 1, "title": "", "code": "", "description": ""}));
}
