//! Progress events for a single download run.
//!
//! The streaming code publishes into an injected [`ProgressSink`] instead of
//! talking to any particular UI; consumers decide how to render.

/// Phase of one download invocation. `Saved` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadPhase {
    Idle,
    Requesting,
    Streaming,
    Assembling,
    Saved,
    Failed,
}

impl DownloadPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, DownloadPhase::Saved | DownloadPhase::Failed)
    }
}

/// One progress update. `Received` is only published when the server
/// declared a total byte count; without one no percentage is computable and
/// updates are simply omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Phase(DownloadPhase),
    Received { bytes: u64, total: u64, percent: u8 },
}

/// Consumer of progress events. Publishing must never fail the download;
/// implementations swallow delivery errors.
pub trait ProgressSink {
    fn publish(&self, event: ProgressEvent);
}

/// Sink that discards everything.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn publish(&self, _event: ProgressEvent) {}
}

impl ProgressSink for std::sync::mpsc::Sender<ProgressEvent> {
    fn publish(&self, event: ProgressEvent) {
        let _ = self.send(event);
    }
}

/// Accumulates received byte counts and yields the rounded integer
/// percentage whenever it changes. Monotone by construction: the received
/// count only grows and the value is capped at 100.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    received: u64,
    last_percent: Option<u8>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one chunk. Returns `Some(percent)` when a total is declared
    /// and the rounded percentage moved; `None` otherwise. A declared total
    /// of zero counts as unknown.
    pub fn record(&mut self, chunk_len: usize, declared_total: Option<u64>) -> Option<u8> {
        self.received += chunk_len as u64;
        let total = declared_total.filter(|t| *t > 0)?;
        let percent =
            (((self.received as f64 / total as f64) * 100.0).round() as u64).min(100) as u8;
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        Some(percent)
    }

    /// Total bytes recorded so far.
    pub fn received(&self) -> u64 {
        self.received
    }
}
