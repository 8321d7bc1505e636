//! Upload a local file, submit it, and poll until the job finishes.
//!
//! The client never polls by itself; this loop is the caller's schedule.
//!
//! ```text
//! GLADIA_API_KEY=... RUST_LOG=gladia_client=debug \
//!     cargo run --example transcribe_file -- path/to/audio.wav
//! ```

use anyhow::{bail, Context};
use gladia_client::transcription::DiarizationConfig;
use gladia_client::{
    CallContext, CancellationToken, GladiaClient, JobStatus, TranscriptionRequest,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: transcribe_file <audio-file>")?;

    let client = GladiaClient::builder().build()?;

    // Ctrl-C cancels whatever request is in flight.
    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });
    let ctx = CallContext::new().with_cancellation(token);

    let upload = client.upload_file(&ctx, &path).await?;
    tracing::info!(
        "Uploaded {} ({:.1}s)",
        upload.audio_metadata.filename,
        upload.audio_metadata.audio_duration
    );

    let request = TranscriptionRequest::new(&upload.audio_url)
        .with_diarization(Some(DiarizationConfig::range(1, 4)));
    let job = client.submit_transcription(&ctx, &request).await?;
    tracing::info!("Submitted job {}", job.id);

    loop {
        let status = client.transcription_status(&ctx, &job.id).await?;
        match status.status {
            JobStatus::Done => break,
            JobStatus::Error => bail!(
                "job {} failed with error code {:?}",
                job.id,
                status.error_code
            ),
            other => tracing::info!("Job {} is {:?}", job.id, other),
        }
        tokio::time::sleep(Duration::from_secs(3)).await;
    }

    let completed = client.transcription_result(&ctx, &job.id).await?;
    for (step, error) in completed.result.failed_addons() {
        tracing::warn!("{} failed: {}", step, error.message);
    }
    if let Some(transcript) = completed.result.transcription {
        for utterance in transcript.utterances {
            println!(
                "[{:>7.2} - {:>7.2}] speaker {}: {}",
                utterance.start,
                utterance.end,
                utterance
                    .speaker
                    .map_or_else(|| "?".to_string(), |s| s.to_string()),
                utterance.text.trim()
            );
        }
    }
    Ok(())
}
