//! Audio upload: multipart encoding of the audio payload and the upload response schema.

pub(crate) mod form;
mod types;

pub use types::{AudioMetadata, UploadResponse};
