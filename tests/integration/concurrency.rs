//! Concurrent writers against one shared store.

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tokio_test::assert_ok;

use super::{call, test_app};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let app = test_app();

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                call(
                    &app,
                    Method::POST,
                    "/snippets",
                    Some(json!({"title": format!("t{i}")})),
                )
                .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        let (status, body) = assert_ok!(task.await);
        assert_eq!(status, StatusCode::CREATED);
        assert!(ids.insert(body["id"].as_i64().unwrap()));
    }

    assert_eq!(ids.len(), 50);
    assert_eq!(ids.iter().min(), Some(&3));
    assert_eq!(ids.iter().max(), Some(&52));

    let (_, list) = call(&app, Method::GET, "/snippets", None).await;
    assert_eq!(list.as_array().unwrap().len(), 52);
}
