//! The reqwest transport against a local mock server: real wire format end to end.

use gladia_client::transport::TransportError;
use gladia_client::{CallContext, Error, GladiaClient, JobStatus, TranscriptionRequest};
use mockito::Matcher;
use serde_json::json;

use super::fake_transport::TEST_API_KEY;
use super::mock_server::{
    done_body, job_body, processing_body, upload_body, MockServerFixture, AUDIO_URL, JOB_ID,
};

#[tokio::test]
async fn upload_posts_multipart_audio_field() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v2/upload")
        .match_header("x-gladia-key", TEST_API_KEY)
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="audio"; filename="clip.wav""#.to_string()),
            Matcher::Regex("fake wav payload".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(upload_body().to_string())
        .create_async()
        .await;

    let uploaded = fixture
        .client()
        .upload_bytes(&CallContext::new(), b"fake wav payload", "clip.wav")
        .await
        .unwrap();
    assert_eq!(uploaded.audio_url, AUDIO_URL);
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_posts_json_to_trailing_slash_endpoint() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v2/pre-recorded/")
        .match_header("x-gladia-key", TEST_API_KEY)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "audio_url": AUDIO_URL,
            "detect_language": true
        })))
        .with_status(201)
        .with_body(job_body().to_string())
        .create_async()
        .await;

    let job = fixture
        .client()
        .submit_transcription(
            &CallContext::new(),
            &TranscriptionRequest::new(AUDIO_URL).with_language_detection(),
        )
        .await
        .unwrap();
    assert_eq!(job.id, JOB_ID);
    mock.assert_async().await;
}

#[tokio::test]
async fn status_is_a_plain_get() {
    let mut fixture = MockServerFixture::new().await;
    let path = format!("/v2/pre-recorded/{}", JOB_ID);
    let mock = fixture
        .server
        .mock("GET", path.as_str())
        .match_header("x-gladia-key", TEST_API_KEY)
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(processing_body().to_string())
        .expect(1)
        .create_async()
        .await;

    let status = fixture
        .client()
        .transcription_status(&CallContext::new(), JOB_ID)
        .await
        .unwrap();
    assert_eq!(status.status, JobStatus::Processing);
    assert!(status.result.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn result_is_fetched_from_the_job_url() {
    let mut fixture = MockServerFixture::new().await;
    let path = format!("/v2/pre-recorded/{}", JOB_ID);
    let mock = fixture
        .mock_json_response("GET", path.as_str(), 200, &done_body())
        .await;

    let completed = fixture
        .client()
        .transcription_result(&CallContext::new(), JOB_ID)
        .await
        .unwrap();
    assert_eq!(completed.status, JobStatus::Done);
    mock.assert_async().await;
}

#[tokio::test]
async fn error_status_surfaces_service_message() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"timestamp":"2024-05-01T10:00:00.000Z","statusCode":401,"message":"Invalid x-gladia-key"}"#;
    let mock = fixture
        .mock_error_response("POST", "/v2/pre-recorded/", 401, body)
        .await;

    let err = fixture
        .client()
        .transcribe(&CallContext::new(), AUDIO_URL)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("401 Unauthorized"));
    assert!(err.to_string().contains("Invalid x-gladia-key"));
    mock.assert_async().await;
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_response("POST", "/proxy/gladia/v2/upload", 200, &upload_body())
        .await;

    let client = GladiaClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(format!("{}/proxy/gladia/", fixture.base_url))
        .build()
        .unwrap();
    client
        .upload_bytes(&CallContext::new(), b"x", "x.wav")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = GladiaClient::builder()
        .api_key(TEST_API_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client
        .transcription_status(&CallContext::new(), JOB_ID)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Transport {
            operation: "transcription_status",
            source: TransportError::Http(_),
        }
    ));
}
