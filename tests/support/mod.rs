#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct Stub {
    hits: Arc<AtomicUsize>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
    status: StatusCode,
    reply: Arc<String>,
}

/// In-process scoring backend answering every route with one canned reply.
pub struct Backend {
    pub base_url: String,
    stub: Stub,
}

impl Backend {
    pub fn api_base(&self) -> String {
        format!("{}/api", self.base_url)
    }

    pub fn hits(&self) -> usize {
        self.stub.hits.load(Ordering::SeqCst)
    }

    pub async fn recorded(&self) -> Vec<Recorded> {
        self.stub.recorded.lock().await.clone()
    }
}

pub async fn spawn_backend(status: StatusCode, reply: impl Into<String>) -> Backend {
    let stub = Stub {
        hits: Arc::new(AtomicUsize::new(0)),
        recorded: Arc::new(Mutex::new(Vec::new())),
        status,
        reply: Arc::new(reply.into()),
    };

    let app = Router::new()
        .route("/api/tap", post(record_tap))
        .route("/api/balance", get(record_balance))
        .route("/mine", post(record_mine))
        .with_state(stub.clone());

    let base_url = serve(app).await;
    Backend { base_url, stub }
}

/// `/mine` backend that echoes the username back as the message. Usernames
/// starting with `slow` are answered after a delay.
pub async fn spawn_echo_backend() -> String {
    let app = Router::new().route("/mine", post(echo_mine));
    serve(app).await
}

/// An address nothing listens on.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend crashed");
    });
    format!("http://{addr}")
}

async fn record_tap(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    record(&stub, "/api/tap", &headers, body).await
}

async fn record_mine(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    record(&stub, "/mine", &headers, body).await
}

async fn record_balance(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    record(&stub, "/api/balance", &headers, json!(query)).await
}

async fn record(
    stub: &Stub,
    path: &str,
    headers: &HeaderMap,
    body: Value,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.recorded.lock().await.push(Recorded {
        path: path.to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    });
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.reply.as_ref().clone(),
    )
}

async fn echo_mine(Json(body): Json<Value>) -> Json<Value> {
    let username = body["username"].as_str().unwrap_or_default().to_string();
    if username.starts_with("slow") {
        sleep(Duration::from_millis(300)).await;
    }
    Json(json!({ "message": username, "new_balance": username.len() }))
}
