//! API integration tests.
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`
//! against a stub [`MovieCatalog`], so no provider is contacted.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use movietracker::catalog::MovieCatalog;
use movietracker::config::Config;
use movietracker::server::{create_router, AppContext};
use movietracker_common::{Error, NormalizedMovie, Page, Result};
use tower::ServiceExt;

/// Catalog that serves canned movies and records the arguments it saw.
#[derive(Default)]
struct StubCatalog {
    calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn movie(id: u64, title: &str) -> NormalizedMovie {
    NormalizedMovie {
        id,
        title: title.to_string(),
        year: "2001".to_string(),
        ..Default::default()
    }
}

#[async_trait]
impl MovieCatalog for StubCatalog {
    async fn discover_movies(&self, page: u32) -> Result<Page<NormalizedMovie>> {
        self.record(format!("discover:{page}"));
        Ok(Page::new(page, 4, vec![movie(1, "Amélie"), movie(2, "Spirited Away")]))
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<NormalizedMovie>> {
        self.record(format!("search:{query}:{page}"));
        Ok(Page::new(page, 1, vec![movie(3, query)]))
    }

    async fn get_movie(&self, id: u64) -> Result<NormalizedMovie> {
        self.record(format!("movie:{id}"));
        match id {
            13 => Err(Error::content_policy("adult content")),
            500 => Err(Error::UpstreamStatus { status: 500 }),
            _ => Ok(movie(id, "Found")),
        }
    }
}

fn app() -> (Router, Arc<StubCatalog>) {
    let stub = Arc::new(StubCatalog::default());
    let ctx = AppContext::new(Config::default(), stub.clone());
    (create_router(ctx), stub)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok() {
    let (app, _) = app();
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

// ---------------------------------------------------------------------------
// Discover
// ---------------------------------------------------------------------------

#[tokio::test]
async fn discover_defaults_to_first_page() {
    let (app, stub) = app();
    let (status, json) = get_json(app, "/api/movies").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"], 1);
    assert_eq!(json["total_pages"], 4);
    assert_eq!(json["total_results"], 2);
    assert_eq!(json["results"][0]["title"], "Amélie");
    assert_eq!(stub.calls(), vec!["discover:1"]);
}

#[tokio::test]
async fn discover_bad_pages_fall_back_to_one() {
    for uri in ["/api/movies?page=abc", "/api/movies?page=0", "/api/movies?page=-2"] {
        let (app, stub) = app();
        let (status, _) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(stub.calls(), vec!["discover:1"], "{uri}");
    }
}

#[tokio::test]
async fn discover_passes_requested_page() {
    let (app, stub) = app();
    let (status, json) = get_json(app, "/api/movies?page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"], 3);
    assert_eq!(stub.calls(), vec!["discover:3"]);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_requires_query() {
    for uri in ["/api/movies/search", "/api/movies/search?query=%20%20"] {
        let (app, stub) = app();
        let (status, json) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["code"], "validation_error");
        assert!(stub.calls().is_empty());
    }
}

#[tokio::test]
async fn search_forwards_query_and_page() {
    let (app, stub) = app();
    let (status, json) = get_json(app, "/api/movies/search?query=blade%20runner&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"][0]["title"], "blade runner");
    assert_eq!(stub.calls(), vec!["search:blade runner:2"]);
}

// ---------------------------------------------------------------------------
// Single movie
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_movie_returns_dto() {
    let (app, _) = app();
    let (status, json) = get_json(app, "/api/movies/550").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 550);
    assert_eq!(json["year"], "2001");
}

#[tokio::test]
async fn get_movie_rejects_non_numeric_id() {
    let (app, stub) = app();
    let (status, json) = get_json(app, "/api/movies/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "validation_error");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn content_policy_rejection_is_not_found() {
    let (app, _) = app();
    let (status, json) = get_json(app, "/api/movies/13").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "content_policy");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let (app, _) = app();
    let (status, _) = get_json(app, "/api/movies/500").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// ---------------------------------------------------------------------------
// OpenAPI
// ---------------------------------------------------------------------------

#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _) = app();
    let (status, json) = get_json(app, "/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"].get("/api/movies").is_some());
    assert!(json["paths"].get("/api/movies/{id}").is_some());
}
