//! Upload response types.

use serde::{Deserialize, Serialize};

/// Response of `POST /v2/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// URL to pass as `audio_url` when submitting a transcription.
    pub audio_url: String,
    pub audio_metadata: AudioMetadata,
}

/// What the service detected about the uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioMetadata {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub extension: String,
    pub size: u64,
    pub audio_duration: f64,
    pub number_of_channels: u32,
}
