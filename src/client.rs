//! Gladia API client.
//!
//! Keep the public surface small: one client type, one builder, one per-call
//! context. Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod dispatch;
mod transcription;
pub mod types;
mod upload;

pub use builder::GladiaClientBuilder;
pub use self::core::{GladiaClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use dispatch::ACCEPTED_STATUSES;
pub use types::CallContext;
