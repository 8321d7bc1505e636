//! # gladia-client
//!
//! Async client for the Gladia pre-recorded speech-to-text API.
//!
//! ## Overview
//!
//! Every operation is one HTTP round trip: upload an audio file, submit a
//! transcription job, then fetch its status or its final result. The client
//! never retries and never polls on its own; callers decide when to ask again.
//!
//! - **Injectable transport**: requests go through the [`transport::Transport`]
//!   trait, so tests can replace the network with a fake.
//! - **One success policy**: 200 and 201 are accepted everywhere; any other
//!   status becomes [`Error::UnexpectedStatus`] with the response body attached.
//! - **Cancellation**: each call takes a [`CallContext`] with an optional
//!   cancellation token and deadline.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gladia_client::{CallContext, GladiaClient, JobStatus};
//!
//! #[tokio::main]
//! async fn main() -> gladia_client::Result<()> {
//!     let client = GladiaClient::new("your-api-key")?;
//!     let ctx = CallContext::new();
//!
//!     let upload = client.upload_file(&ctx, "meeting.wav").await?;
//!     let job = client.transcribe(&ctx, &upload.audio_url).await?;
//!
//!     let status = client.transcription_status(&ctx, &job.id).await?;
//!     if status.status == JobStatus::Done {
//!         let done = client.transcription_result(&ctx, &job.id).await?;
//!         println!("{:?}", done.result.transcription);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, per-call context and request dispatch |
//! | [`transport`] | Transport trait and the reqwest-backed implementation |
//! | [`upload`] | Multipart encoding and upload response schema |
//! | [`transcription`] | Job request options and status/result records |

pub mod client;
pub mod transcription;
pub mod transport;
pub mod upload;

// Re-export main types for convenience
pub use client::{CallContext, GladiaClient, GladiaClientBuilder};
pub use transcription::{
    CompletedTranscription, JobStatus, TranscriptionJob, TranscriptionRequest,
    TranscriptionStatus,
};
pub use tokio_util::sync::CancellationToken;
pub use upload::UploadResponse;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
