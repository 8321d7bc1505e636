use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-call cancellation and deadline.
///
/// `CallContext::default()` means "no cancellation, client timeout only".
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the in-flight request as soon as `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Per-call deadline. It can only shorten the client's timeout, never extend it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn effective_timeout(&self, client_timeout: Duration) -> Duration {
        self.timeout.map_or(client_timeout, |t| t.min(client_timeout))
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|t| t.is_cancelled())
    }
}
