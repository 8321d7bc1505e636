//! Records returned by the pre-recorded endpoints.

use serde::{Deserialize, Serialize};

/// Handle returned when a job is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionJob {
    pub id: String,
    pub result_url: String,
}

/// Lifecycle of a job on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Done,
    Error,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// True once the job will not change anymore.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Error)
    }
}

/// Partial view of a job, polled until it reaches a terminal status.
///
/// Most fields stay `None` while the job is queued or processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionStatus {
    pub id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_params: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TranscriptionResult>,
}

/// Final record of a finished job. Decoding fails while `result` is still missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTranscription {
    pub id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub completed_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_params: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<serde_json::Value>,
    pub result: TranscriptionResult,
}

/// File the job was created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_channels: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub metadata: ResultMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<Transcript>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<AddonResult<Vec<TranslatedTranscript>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summarization: Option<AddonResult<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<AddonResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_entity_recognition: Option<AddonResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<AddonResult>,
}

impl TranscriptionResult {
    /// Sub-steps that reported a failure, by name.
    pub fn failed_addons(&self) -> Vec<(&'static str, &ErrorInfo)> {
        let mut failed = Vec::new();
        if let Some(err) = self.translation.as_ref().and_then(AddonResult::failure) {
            failed.push(("translation", err));
        }
        if let Some(err) = self.summarization.as_ref().and_then(AddonResult::failure) {
            failed.push(("summarization", err));
        }
        if let Some(err) = self.sentences.as_ref().and_then(AddonResult::failure) {
            failed.push(("sentences", err));
        }
        if let Some(err) = self
            .named_entity_recognition
            .as_ref()
            .and_then(AddonResult::failure)
        {
            failed.push(("named_entity_recognition", err));
        }
        if let Some(err) = self.sentiment_analysis.as_ref().and_then(AddonResult::failure) {
            failed.push(("sentiment_analysis", err));
        }
        failed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub audio_duration: f64,
    #[serde(default)]
    pub number_of_distinct_channels: u32,
    #[serde(default)]
    pub billing_time: f64,
    #[serde(default)]
    pub transcription_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub full_transcript: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub utterances: Vec<Utterance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtitles: Vec<Subtitle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub channel: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    pub format: super::SubtitleFormat,
    pub subtitles: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatedTranscript {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub full_transcript: String,
    #[serde(default)]
    pub utterances: Vec<Utterance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Outcome of an optional processing step (translation, summarization, ...).
///
/// A failed step does not fail the job; check [`AddonResult::failure`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonResult<T = serde_json::Value> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub is_empty: bool,
    #[serde(default)]
    pub exec_time: f64,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
    #[serde(default)]
    pub results: Option<T>,
}

impl<T> AddonResult<T> {
    pub fn failure(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }
}

/// Failure reported by the service for one processing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub exception: String,
    #[serde(default)]
    pub message: String,
}
