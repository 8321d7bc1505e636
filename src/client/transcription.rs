use crate::client::core::GladiaClient;
use crate::client::types::CallContext;
use crate::transcription::{
    CompletedTranscription, TranscriptionJob, TranscriptionRequest, TranscriptionStatus,
};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;

// The trailing empty segment keeps the slash the submit endpoint expects.
const SUBMIT_PATH: &[&str] = &["v2", "pre-recorded", ""];

impl GladiaClient {
    /// Submit a transcription job. No option combination is validated locally.
    pub async fn submit_transcription(
        &self,
        ctx: &CallContext,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionJob> {
        self.send_json(
            ctx,
            "submit_transcription",
            Method::POST,
            SUBMIT_PATH,
            Some(request),
        )
        .await
    }

    /// Submit a job for `audio_url` with default options.
    pub async fn transcribe(&self, ctx: &CallContext, audio_url: &str) -> Result<TranscriptionJob> {
        self.submit_transcription(ctx, &TranscriptionRequest::new(audio_url))
            .await
    }

    /// Current state of a job. Result fields stay empty until the job is done.
    pub async fn transcription_status(
        &self,
        ctx: &CallContext,
        transcription_id: &str,
    ) -> Result<TranscriptionStatus> {
        self.fetch_job(ctx, "transcription_status", transcription_id).await
    }

    /// Full record of a finished job.
    ///
    /// While the job is still running the response lacks a result and this
    /// fails with [`Error::Decode`]; poll
    /// [`transcription_status`](Self::transcription_status) first.
    pub async fn transcription_result(
        &self,
        ctx: &CallContext,
        transcription_id: &str,
    ) -> Result<CompletedTranscription> {
        self.fetch_job(ctx, "transcription_result", transcription_id).await
    }

    async fn fetch_job<T: serde::de::DeserializeOwned>(
        &self,
        ctx: &CallContext,
        operation: &'static str,
        transcription_id: &str,
    ) -> Result<T> {
        if transcription_id.trim().is_empty() {
            return Err(Error::validation_with_context(
                "Transcription id must not be empty",
                ErrorContext::new()
                    .with_field_path("transcription_id")
                    .with_source(operation),
            ));
        }
        self.send_json::<(), T>(
            ctx,
            operation,
            Method::GET,
            &["v2", "pre-recorded", transcription_id],
            None,
        )
        .await
    }
}
