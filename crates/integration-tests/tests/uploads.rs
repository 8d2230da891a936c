//! Integration tests for the upload endpoint.
//!
//! These tests require a running `granel-server` pointed at a disposable
//! store. Run with: `cargo test -p granel-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use granel_integration_tests::base_url;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires running granel-server"]
async fn test_upload_sanitizes_name_and_serves_file() {
    let client = reqwest::Client::new();
    let base = base_url();

    let part = Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name("My Photo.JPG")
        .mime_str("image/jpeg")
        .unwrap();
    let form = Form::new().part("file", part);

    let resp = client
        .post(format!("{base}/api/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    let file_name = body["fileName"].as_str().unwrap();
    assert!(file_name.ends_with("-my-photo.jpg"));
    assert_eq!(body["url"].as_str().unwrap(), format!("/uploads/{file_name}"));

    // The stored file is immediately servable
    let served = client
        .get(format!("{base}{}", body["url"].as_str().unwrap()))
        .send()
        .await
        .unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().as_ref(), [0x89, b'P', b'N', b'G']);
}

#[tokio::test]
#[ignore = "Requires running granel-server"]
async fn test_upload_without_file_field_is_rejected() {
    let client = reqwest::Client::new();
    let base = base_url();

    let form = Form::new().text("other", "value");
    let resp = client
        .post(format!("{base}/api/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
