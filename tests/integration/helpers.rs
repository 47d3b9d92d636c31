//! Shared test helpers for integration tests.
//!
//! Each test builds its own application over a fresh temporary directory
//! (SQLite file plus blob root), so tests are isolated and can run in
//! parallel.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use filegate_api::{AppState, build_router};
use filegate_auth::jwt::{JwtDecoder, JwtEncoder};
use filegate_auth::password::{PasswordHasher, PasswordValidator};
use filegate_core::config::AppConfig;
use filegate_core::traits::blob::BlobStore;
use filegate_database::DatabasePool;
use filegate_database::migration::run_migrations;
use filegate_database::repositories::file::FileRepository;
use filegate_database::repositories::user::UserRepository;
use filegate_service::{AccessEngine, DownloadService, FileService, LinkGenerator, UserService};
use filegate_storage::LocalBlobStore;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db: DatabasePool,
    /// Root directory holding uploaded blobs.
    pub storage_root: PathBuf,
    /// Keeps the temporary directory alive for the test's duration.
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application over a fresh temporary directory.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage_root = dir.path().join("uploads");

        let mut config = AppConfig::default();
        config.database.path = dir.path().join("filegate.db").display().to_string();
        config.storage.root = storage_root.display().to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let blobs: Arc<dyn BlobStore> = Arc::new(
            LocalBlobStore::new(&config.storage.root)
                .await
                .expect("Failed to init blob store"),
        );

        let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
        let file_repo = Arc::new(FileRepository::new(db.pool().clone()));

        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let access = Arc::new(AccessEngine::new(Arc::clone(&hasher)));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&hasher),
            Arc::clone(&validator),
            Arc::clone(&jwt_encoder),
        ));
        let file_service = Arc::new(FileService::new(
            Arc::clone(&file_repo),
            Arc::clone(&blobs),
            LinkGenerator::new(),
            Arc::clone(&access),
        ));
        let download_service = Arc::new(DownloadService::new(
            Arc::clone(&file_repo),
            Arc::clone(&blobs),
            Arc::clone(&access),
        ));

        let state = AppState {
            config: Arc::new(config),
            db: db.clone(),
            jwt_decoder,
            user_service,
            file_service,
            download_service,
        };

        Self {
            router: build_router(state),
            db,
            storage_root,
            _dir: dir,
        }
    }

    /// Register an account through the API, asserting success.
    pub async fn register(&self, username: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/register",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Login and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Register plus login in one step.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        self.register(username, password).await;
        self.login(username, password).await
    }

    /// Upload a file through the multipart endpoint and return the link id.
    pub async fn upload(&self, token: &str, filename: &str, content_type: &str, data: &[u8]) -> String {
        let response = self.upload_raw(token, filename, content_type, data).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Upload failed: {:?}",
            response.body
        );

        response
            .body
            .get("linkId")
            .and_then(|v| v.as_str())
            .expect("No linkId in upload response")
            .to_string()
    }

    /// Upload without asserting, for failure-path tests.
    pub async fn upload_raw(
        &self,
        token: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let body = multipart_body("file", filename, content_type, data);

        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::from(body))
            .expect("Failed to build upload request");

        self.send(req).await
    }

    /// Fetch a download URL, optionally with a password and bearer token.
    pub async fn download(
        &self,
        link_id: &str,
        password: Option<&str>,
        token: Option<&str>,
    ) -> RawResponse {
        let uri = match password {
            Some(p) => format!("/download/{}?password={}", link_id, p),
            None => format!("/download/{}", link_id),
        };

        let mut req = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::empty()).expect("Failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        RawResponse {
            status,
            headers,
            bytes,
        }
    }

    /// Make a JSON request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Look up the storage key of a file record directly in the database.
    pub async fn storage_key_of(&self, file_id: &str) -> String {
        sqlx::query_scalar("SELECT storage_key FROM files WHERE id = ?")
            .bind(file_id)
            .fetch_one(self.db.pool())
            .await
            .expect("File record not found")
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a JSON test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}

/// Response from a download request, body kept raw.
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body bytes.
    pub bytes: Bytes,
}

impl RawResponse {
    /// Returns a response header as a string, or panics if absent.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_else(|| panic!("Missing header {}", name))
    }
}

/// Multipart boundary used by all hand-built test bodies.
pub const BOUNDARY: &str = "filegate-test-boundary";

/// Build a single-field multipart/form-data body.
pub fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}
