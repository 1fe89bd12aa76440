#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use cms_api::auth::jwt::JwtConfig;
use cms_api::config::ServerConfig;
use cms_api::router::build_app_router;
use cms_api::state::AppState;
use cms_api::uploads::FileStore;

/// Build a test `ServerConfig` with safe defaults and `upload_dir` pointing
/// at `upload_dir`.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: PgConnectOptions::new().database("unused"),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        upload_dir,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// The application router plus the temporary upload root it writes into.
///
/// The directory is removed when this value is dropped, so keep it alive for
/// the whole test.
pub struct TestApp {
    router: Router,
    uploads: TempDir,
}

impl TestApp {
    /// A fresh handle to the router (each request consumes one).
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// On-disk location of a stored public path such as
    /// `/uploads/news-events/news_1_ab12cd34.png`.
    pub fn stored_file(&self, public_path: &str) -> PathBuf {
        let relative = public_path
            .strip_prefix("/uploads/")
            .unwrap_or_else(|| panic!("not an upload path: {public_path}"));
        self.uploads.path().join(relative)
    }

    /// Number of files stored under one upload directory.
    pub fn count_files(&self, directory: &str) -> usize {
        std::fs::read_dir(self.uploads.path().join(directory))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over `pool`, with uploads going to a fresh temporary directory.
pub fn build_test_app(pool: PgPool) -> TestApp {
    build_test_app_with(pool, |_| {})
}

/// Like [`build_test_app`], with `configure` applied to the config first.
pub fn build_test_app_with(pool: PgPool, configure: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let uploads = TempDir::new().expect("temp upload dir");
    let mut config = test_config(uploads.path().to_path_buf());
    configure(&mut config);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        files: Arc::new(FileStore::new(uploads.path())),
    };

    TestApp {
        router: build_app_router(state, &config),
        uploads,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_multipart(app: Router, uri: &str, form: MultipartBody) -> Response<Body> {
    send_multipart(app, Method::POST, uri, form).await
}

pub async fn put_multipart(app: Router, uri: &str, form: MultipartBody) -> Response<Body> {
    send_multipart(app, Method::PUT, uri, form).await
}

async fn send_multipart(
    app: Router,
    method: Method,
    uri: &str,
    form: MultipartBody,
) -> Response<Body> {
    let (content_type, body) = form.finish();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "cms-test-boundary-7d1f";

/// Minimal `multipart/form-data` encoder for tests.
#[derive(Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> (String, Vec<u8>) {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={BOUNDARY}"), self.bytes)
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Smallest valid PNG: signature plus IHDR of a 1x1 image.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// A JPEG header is enough for the magic-byte check.
pub const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\ntrailer\n<<>>\n%%EOF\n";
