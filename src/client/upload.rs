use crate::client::core::GladiaClient;
use crate::client::types::CallContext;
use crate::upload::UploadResponse;
use crate::{Error, Result};
use std::path::Path;

const OPERATION: &str = "upload";
const UPLOAD_PATH: &[&str] = &["v2", "upload"];

impl GladiaClient {
    /// Upload a local audio file. The returned `audio_url` feeds
    /// [`submit_transcription`](GladiaClient::submit_transcription).
    ///
    /// A file that cannot be read fails with [`Error::Io`] before any network call.
    pub async fn upload_file(
        &self,
        ctx: &CallContext,
        path: impl AsRef<Path>,
    ) -> Result<UploadResponse> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        self.upload_bytes(ctx, &content, &filename).await
    }

    /// Upload audio already held in memory under `filename`.
    pub async fn upload_bytes(
        &self,
        ctx: &CallContext,
        content: &[u8],
        filename: &str,
    ) -> Result<UploadResponse> {
        let response = self
            .send_multipart(ctx, OPERATION, UPLOAD_PATH, content, filename)
            .await?;
        Self::decode_response(OPERATION, response)
    }
}
