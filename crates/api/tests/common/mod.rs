#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use prodgen_api::config::ServerConfig;
use prodgen_api::drafts::DraftSessions;
use prodgen_api::router::build_app_router;
use prodgen_api::state::AppState;
use prodgen_core::error::CoreError;
use prodgen_core::mockup::{MockupSource, RawMockup, RawSmartObject};
use prodgen_core::submission::{PersistRecord, ProductStore};
use prodgen_core::types::DbId;
use prodgen_db::PgProductStore;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        mockups_api_url: "http://mockups.invalid".to_string(),
        mockups_api_key: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Collaborator fakes
// ---------------------------------------------------------------------------

/// Mockup source returning a fixed catalog.
pub struct StaticMockups(pub Vec<RawMockup>);

#[async_trait]
impl MockupSource for StaticMockups {
    async fn fetch_mockups(&self) -> Result<Vec<RawMockup>, CoreError> {
        Ok(self.0.clone())
    }
}

/// Mockup source that is always down.
pub struct UnavailableMockups;

#[async_trait]
impl MockupSource for UnavailableMockups {
    async fn fetch_mockups(&self) -> Result<Vec<RawMockup>, CoreError> {
        Err(CoreError::Upstream("mockup provider unreachable".into()))
    }
}

/// Product store that counts calls and always fails.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn add_product(&self, _record: &PersistRecord) -> Result<Option<DbId>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CoreError::Upstream("disk full".into()))
    }
}

impl FailingStore {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn smart_object(name: &str, uuid: &str) -> RawSmartObject {
    RawSmartObject {
        name: Some(name.to_string()),
        uuid: Some(uuid.to_string()),
    }
}

/// Two mockups: a tee with front/back print areas and a mug.
pub fn sample_mockups() -> Vec<RawMockup> {
    vec![
        RawMockup {
            id: None,
            uuid: Some("tee-mockup".to_string()),
            smart_objects: vec![
                smart_object("Front", "so-front"),
                smart_object("Background", "so-bg"),
                smart_object("Back", "so-back"),
            ],
        },
        RawMockup {
            id: Some("mug-mockup".to_string()),
            uuid: None,
            smart_objects: vec![smart_object("Mug Wrap", "so-mug")],
        },
    ]
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with the sample catalog and the real
/// PostgreSQL product store.
pub fn build_test_app(pool: PgPool) -> Router {
    let products = Arc::new(PgProductStore::new(pool.clone()));
    build_test_app_with(pool, Arc::new(StaticMockups(sample_mockups())), products)
}

/// Build the application router with custom collaborators.
pub fn build_test_app_with(
    pool: PgPool,
    mockups: Arc<dyn MockupSource>,
    products: Arc<dyn ProductStore>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        drafts: Arc::new(DraftSessions::new()),
        mockups,
        products,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Open a draft session and return its id.
pub async fn open_draft(app: Router) -> String {
    let response = post(app, "/api/v1/blank-items/drafts").await;
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}
