//! Integration tests for the import trigger, against the mock backend.

mod helpers;

use airport_console::{ApiClient, ApiError, ImportStatus};
use reqwest::StatusCode;

fn client(base_url: url::Url) -> ApiClient {
    ApiClient::new(reqwest::Client::new(), base_url)
}

#[tokio::test]
async fn credentials_travel_as_multipart_form_fields() {
    let backend = helpers::start_backend().await;
    let client = client(backend.base_url);

    let ack = client
        .trigger_import("admin", "hunter2")
        .await
        .expect("trigger failed")
        .data;

    assert_eq!(ack.status, ImportStatus::Success);
    assert_eq!(ack.created, 2);
    assert_eq!(ack.updated, 5);
    assert_eq!(ack.details.as_deref(), Some("Successfully processed 7 airports."));

    let recorded = backend.recorded.lock().unwrap();
    assert_eq!(recorded.import_fields.len(), 1);
    let fields = &recorded.import_fields[0];
    assert_eq!(fields.get("user").map(String::as_str), Some("admin"));
    assert_eq!(fields.get("password").map(String::as_str), Some("hunter2"));
}

#[tokio::test]
async fn rejected_credentials_surface_as_an_http_status_error() {
    let backend = helpers::start_backend().await;
    let client = client(backend.base_url);

    let error = client.trigger_import("admin", "wrong").await.unwrap_err();
    match error {
        ApiError::Status { status, .. } => assert_eq!(status, StatusCode::BAD_REQUEST),
        other => panic!("unexpected error: {other:?}"),
    }
}
