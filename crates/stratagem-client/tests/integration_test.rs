use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use stratagem_core::config::ClientConfig;
use stratagem_core::schema::FieldValues;
use stratagem_client::{Dispatcher, SimulationClient};
use tokio::net::TcpListener;

async fn spawn_app(app: Router) -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0)); // Random port
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

fn client_for(base_url: &str) -> SimulationClient {
    let config = ClientConfig {
        api_url: base_url.to_string(),
        timeout_secs: 5,
    };
    SimulationClient::new(&config).unwrap()
}

fn josephus_values() -> FieldValues {
    let mut values = FieldValues::for_algorithm("Josephus Problem");
    values.set("length", "7");
    values.set("interval", "3");
    values
}

#[tokio::test]
async fn execute_settles_into_success() {
    let app = Router::new().route(
        "/decrease-conquer/josephus",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"length": 7, "interval": 3}));
            Json(json!({
                "survivor": 4,
                "elimination_order": [3, 6, 2, 7, 5, 1],
                "execution_time": 0.12,
                "algorithm": "josephus",
                "people_count": 7
            }))
        }),
    );
    let base = spawn_app(app).await;

    let dispatcher = Dispatcher::new(client_for(&base));
    assert!(dispatcher.snapshot().is_idle());

    let result = dispatcher.execute("Josephus Problem", &josephus_values()).await;
    assert_eq!(result.unwrap()["survivor"], json!(4));

    let state = dispatcher.snapshot();
    assert!(state.is_success());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.data.unwrap()["people_count"], json!(7));
}

#[tokio::test]
async fn loading_is_observable_while_in_flight() {
    let app = Router::new().route(
        "/decrease-conquer/josephus",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({"survivor": 1}))
        }),
    );
    let base = spawn_app(app).await;

    let dispatcher = Arc::new(Dispatcher::new(client_for(&base)));
    let worker = {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move { dispatcher.execute("Josephus Problem", &josephus_values()).await })
    };

    // Poll until the in-flight state becomes visible.
    let mut saw_loading = false;
    for _ in 0..50 {
        let state = dispatcher.snapshot();
        if state.loading {
            assert_eq!(state.data, None);
            assert_eq!(state.error, None);
            saw_loading = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(saw_loading, "never observed loading=true");

    let result = worker.await.unwrap();
    assert!(result.is_some());
    assert!(dispatcher.snapshot().is_success());
}

#[tokio::test]
async fn server_detail_becomes_the_error_message() {
    let app = Router::new().route(
        "/decrease-conquer/binary-search",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Array must be sorted for binary search"})),
            )
        }),
    );
    let base = spawn_app(app).await;

    let dispatcher = Dispatcher::new(client_for(&base));
    let mut values = FieldValues::for_algorithm("Binary Search");
    values.set("array", "3,1,2");
    values.set("target", "1");

    let result = dispatcher.execute("Binary Search", &values).await;
    assert!(result.is_none());

    let state = dispatcher.snapshot();
    assert!(state.is_failure());
    assert_eq!(
        state.error.as_deref(),
        Some("Array must be sorted for binary search")
    );
    assert_eq!(state.data, None);
}

#[tokio::test]
async fn json_error_without_detail_falls_back_to_status_line() {
    let app = Router::new().route(
        "/greedy/huffman-coding",
        post(|| async { (StatusCode::NOT_FOUND, Json(json!({}))) }),
    );
    let base = spawn_app(app).await;

    let dispatcher = Dispatcher::new(client_for(&base));
    let mut values = FieldValues::for_algorithm("Huffman Coding");
    values.set("message", "abc");

    dispatcher.execute("Huffman Coding", &values).await;
    assert_eq!(
        dispatcher.snapshot().error.as_deref(),
        Some("HTTP 404: Not Found")
    );
}

#[tokio::test]
async fn non_json_error_body_is_a_network_error() {
    let app = Router::new().route(
        "/greedy/huffman-coding",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_app(app).await;

    let dispatcher = Dispatcher::new(client_for(&base));
    let mut values = FieldValues::for_algorithm("Huffman Coding");
    values.set("message", "abc");

    dispatcher.execute("Huffman Coding", &values).await;
    assert_eq!(dispatcher.snapshot().error.as_deref(), Some("Network error"));
}

#[tokio::test]
async fn unknown_algorithm_never_touches_the_network() {
    // No server at all: the dispatcher must fail before sending.
    let dispatcher = Dispatcher::new(client_for("http://127.0.0.1:9"));
    let values = FieldValues::for_algorithm("Merge Sort");

    let result = dispatcher.execute("Merge Sort", &values).await;
    assert!(result.is_none());
    assert_eq!(
        dispatcher.snapshot().error.as_deref(),
        Some("Algorithm 'Merge Sort' is not implemented")
    );
}

#[tokio::test]
async fn connection_failure_surfaces_transport_message() {
    let dispatcher = Dispatcher::new(client_for("http://127.0.0.1:9"));

    dispatcher.execute("Josephus Problem", &josephus_values()).await;
    let state = dispatcher.snapshot();
    assert!(state.is_failure());
    assert!(!state.error.unwrap().is_empty());
}

#[tokio::test]
async fn reset_restores_idle_after_any_outcome() {
    let app = Router::new().route(
        "/decrease-conquer/josephus",
        post(|| async { Json(json!({"survivor": 4})) }),
    );
    let base = spawn_app(app).await;

    let dispatcher = Dispatcher::new(client_for(&base));
    dispatcher.execute("Josephus Problem", &josephus_values()).await;
    assert!(dispatcher.snapshot().is_success());

    dispatcher.reset();
    assert!(dispatcher.snapshot().is_idle());
}

#[tokio::test]
async fn metadata_endpoints_pass_json_through() {
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
        .route(
            "/algorithms",
            get(|| async { Json(json!({"total": 13, "greedy": ["dijkstra", "huffman-coding"]})) }),
        )
        .route(
            "/algorithms/josephus/info",
            get(|| async { Json(json!({"name": "Josephus Problem"})) }),
        );
    let base = spawn_app(app).await;

    let client = client_for(&base);
    assert_eq!(client.health().await.unwrap()["status"], json!("healthy"));
    assert_eq!(client.algorithms().await.unwrap()["total"], json!(13));
    assert_eq!(
        client.algorithm_info("josephus").await.unwrap()["name"],
        json!("Josephus Problem")
    );
}
