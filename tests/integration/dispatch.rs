//! Status policy, header placement and body handling shared by every operation.

use gladia_client::{CallContext, Error, TranscriptionRequest};
use reqwest::Method;
use serde_json::json;

use super::fake_transport::{client_with, header, FakeTransport, TEST_API_KEY};
use super::mock_server::{job_body, JOB_ID};

#[tokio::test]
async fn accepted_statuses_decode_the_body() {
    for status in [200u16, 201] {
        let fake = FakeTransport::new();
        fake.respond(status, job_body().to_string());
        let client = client_with(fake.clone());

        let job = client
            .transcribe(&CallContext::new(), "https://x/y.wav")
            .await
            .unwrap_or_else(|e| panic!("status {} should be accepted: {}", status, e));
        assert_eq!(job.id, JOB_ID);
    }
}

#[tokio::test]
async fn other_statuses_fail_with_the_raw_body() {
    for status in [202u16, 204, 301, 400, 401, 404, 422, 429, 500, 503] {
        let fake = FakeTransport::new();
        let body = format!(r#"{{"statusCode":{},"message":"rejected with {}"}}"#, status, status);
        fake.respond(status, body.clone());
        let client = client_with(fake.clone());

        let err = client
            .transcribe(&CallContext::new(), "https://x/y.wav")
            .await
            .expect_err("status outside 200/201 must fail");
        match &err {
            Error::UnexpectedStatus {
                operation,
                status: got,
                ..
            } => {
                assert_eq!(*operation, "submit_transcription");
                assert_eq!(*got, status);
            }
            other => panic!("expected UnexpectedStatus for {}, got {:?}", status, other),
        }
        assert!(
            err.to_string().contains(&body),
            "message for {} should carry the body: {}",
            status,
            err
        );
        assert_eq!(err.response_body(), Some(body.as_str()));
    }
}

#[tokio::test]
async fn unregistered_status_code_reads_cleanly() {
    let fake = FakeTransport::new();
    fake.respond(599, "proxy gave up");
    let client = client_with(fake.clone());

    let err = client
        .transcription_status(&CallContext::new(), JOB_ID)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(599));
    let message = err.to_string();
    assert!(message.contains(": 599, body: proxy gave up"), "{}", message);
    assert!(!message.contains("<unknown"), "{}", message);
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error_not_a_status_error() {
    let fake = FakeTransport::new();
    fake.respond(200, r#"{"unexpected":"shape"}"#);
    let client = client_with(fake.clone());

    let err = client
        .transcribe(&CallContext::new(), "https://x/y.wav")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { operation: "submit_transcription", .. }));
    assert_eq!(err.response_body(), Some(r#"{"unexpected":"shape"}"#));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn json_requests_carry_key_content_type_and_body() {
    let fake = FakeTransport::new();
    fake.respond(201, job_body().to_string());
    let client = client_with(fake.clone());

    client
        .submit_transcription(
            &CallContext::new(),
            &TranscriptionRequest::new("https://x/y.wav"),
        )
        .await
        .unwrap();

    let request = fake.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.as_str(), "https://api.gladia.io/v2/pre-recorded/");
    assert_eq!(header(&request, "x-gladia-key"), Some(TEST_API_KEY));
    assert_eq!(header(&request, "content-type"), Some("application/json"));
    let body: serde_json::Value =
        serde_json::from_slice(request.body.as_ref().expect("json body")).unwrap();
    assert_eq!(body, json!({"audio_url": "https://x/y.wav"}));
}

#[tokio::test]
async fn bodiless_requests_omit_content_type() {
    let fake = FakeTransport::new();
    fake.respond(200, json!({"id": JOB_ID, "status": "queued"}).to_string());
    let client = client_with(fake.clone());

    client
        .transcription_status(&CallContext::new(), JOB_ID)
        .await
        .unwrap();

    let request = fake.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.url.as_str(),
        format!("https://api.gladia.io/v2/pre-recorded/{}", JOB_ID)
    );
    assert_eq!(header(&request, "x-gladia-key"), Some(TEST_API_KEY));
    assert!(request.headers.get("content-type").is_none());
    assert!(request.body.is_none());
}

#[tokio::test]
async fn transport_failures_are_reported_with_the_operation() {
    // No scripted response: the fake fails the dispatch itself.
    let fake = FakeTransport::new();
    let client = client_with(fake.clone());

    let err = client
        .transcription_result(&CallContext::new(), JOB_ID)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Transport {
            operation: "transcription_result",
            ..
        }
    ));
    assert!(!err.is_cancelled());
}
