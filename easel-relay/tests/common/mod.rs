#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use easel_relay::{AppState, Config, api};

/// Relay state rooted in a temporary directory.
///
/// Templates live under `<tmp>/mockups`, uploads under `<tmp>/uploads`.
pub struct TestRelay {
    pub state: AppState,
    pub mockups: PathBuf,
    pub uploads: PathBuf,
    _tmp: TempDir,
}

impl TestRelay {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mockups = tmp.path().join("mockups");
        let uploads = tmp.path().join("uploads");
        std::fs::create_dir_all(&mockups).expect("create mockups root");

        let mut config = Config::new(mockups.clone());
        config.uploads_dir = uploads.clone();
        config.public_url = "http://relay.test".to_string();

        Self {
            state: AppState::new(config),
            mockups,
            uploads,
            _tmp: tmp,
        }
    }

    pub fn app(&self) -> Router {
        api::create_router(self.state.clone())
    }

    /// Create `<mockups>/<rel>` as a directory
    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.mockups.join(rel)).expect("create dir");
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request failed")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}

/// POST a multipart form with a single file field
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    file_name: &str,
    data: &[u8],
) -> Response<Body> {
    let boundary = "easel-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request");
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}
