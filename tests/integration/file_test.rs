//! Integration tests for upload, listing, metadata, and deletion.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::helpers::{BOUNDARY, TestApp, multipart_body};

#[tokio::test]
async fn test_upload_returns_link_id() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    let link_id = app
        .upload(&token, "report.pdf", "application/pdf", b"pdf bytes")
        .await;

    assert_eq!(link_id.len(), 64);
    assert!(link_id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_upload_requires_file_field() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    let body = multipart_body("other", "report.pdf", "application/pdf", b"pdf bytes");
    let req = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = app
        .router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .upload_raw("bogus-token", "report.pdf", "application/pdf", b"x")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_shows_compact_entries() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;
    let link_id = app
        .upload(&token, "report.pdf", "application/pdf", b"pdf bytes")
        .await;

    let response = app.request("GET", "/files", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body.as_array().expect("Expected a bare array");
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry["originalFilename"], "report.pdf");
    assert_eq!(entry["linkId"], link_id.as_str());
    assert_eq!(entry["permission"], "private");
    assert!(entry["id"].is_string());

    // Size, content type, and timestamp belong to the metadata view only.
    assert!(entry.get("size").is_none());
    assert!(entry.get("contentType").is_none());
    assert!(entry.get("uploadTime").is_none());
}

#[tokio::test]
async fn test_list_is_scoped_to_owner() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "password123").await;
    let bob = app.register_and_login("bob", "password456").await;

    app.upload(&alice, "secret.txt", "text/plain", b"alice data")
        .await;

    let response = app.request("GET", "/files", None, Some(&bob)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_metadata_round_trip() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;
    let link_id = app
        .upload(&token, "report.pdf", "application/pdf", b"pdf bytes")
        .await;

    let list = app.request("GET", "/files", None, Some(&token)).await;
    let id = list.body[0]["id"].as_str().expect("id").to_string();

    let response = app
        .request("GET", &format!("/files/{}", id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["filename"], "report.pdf");
    assert_eq!(response.body["contentType"], "application/pdf");
    assert_eq!(response.body["size"], 9);
    assert_eq!(response.body["owner"], "alice");
    assert_eq!(response.body["linkId"], link_id.as_str());
    assert_eq!(response.body["permission"], "private");
    assert!(response.body["uploadTime"].is_string());
}

#[tokio::test]
async fn test_metadata_is_owner_only() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "password123").await;
    let bob = app.register_and_login("bob", "password456").await;

    app.upload(&alice, "report.pdf", "application/pdf", b"pdf bytes")
        .await;
    let list = app.request("GET", "/files", None, Some(&alice)).await;
    let id = list.body[0]["id"].as_str().expect("id").to_string();

    let response = app
        .request("GET", &format!("/files/{}", id), None, Some(&bob))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_metadata_unknown_id() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    let response = app
        .request("GET", "/files/no-such-id", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_by_non_owner_leaves_file_intact() {
    let app = TestApp::new().await;
    let alice = app.register_and_login("alice", "password123").await;
    let bob = app.register_and_login("bob", "password456").await;

    let link_id = app
        .upload(&alice, "report.pdf", "application/pdf", b"pdf bytes")
        .await;
    let list = app.request("GET", "/files", None, Some(&alice)).await;
    let id = list.body[0]["id"].as_str().expect("id").to_string();

    let response = app
        .request("DELETE", &format!("/files/{}", id), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Record and blob both survive the denied attempt.
    let meta = app
        .request("GET", &format!("/files/{}", id), None, Some(&alice))
        .await;
    assert_eq!(meta.status, StatusCode::OK);

    let download = app.download(&link_id, None, Some(&alice)).await;
    assert_eq!(download.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_removes_record_and_blob() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    let link_id = app
        .upload(&token, "report.pdf", "application/pdf", b"pdf bytes")
        .await;
    let list = app.request("GET", "/files", None, Some(&token)).await;
    let id = list.body[0]["id"].as_str().expect("id").to_string();
    let storage_key = app.storage_key_of(&id).await;

    let response = app
        .request("DELETE", &format!("/files/{}", id), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let meta = app
        .request("GET", &format!("/files/{}", id), None, Some(&token))
        .await;
    assert_eq!(meta.status, StatusCode::NOT_FOUND);

    let download = app.download(&link_id, None, Some(&token)).await;
    assert_eq!(download.status, StatusCode::NOT_FOUND);

    assert!(!app.storage_root.join(&storage_key).exists());
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    let response = app
        .request("DELETE", "/files/no-such-id", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uploads_with_same_name_stay_separate() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    let first = app
        .upload(&token, "notes.txt", "text/plain", b"first version")
        .await;
    let second = app
        .upload(&token, "notes.txt", "text/plain", b"second version")
        .await;

    assert_ne!(first, second);

    let a = app.download(&first, None, Some(&token)).await;
    let b = app.download(&second, None, Some(&token)).await;
    assert_eq!(a.bytes.as_ref(), b"first version");
    assert_eq!(b.bytes.as_ref(), b"second version");
}
