//! Relayed single-stream audio downloader.
//!
//! One GET, chunks appended in arrival order via the transfer's write
//! callback, percentage progress when the server declared a total. No
//! retry and no overall timeout on the streaming leg; a connect timeout and
//! a low-speed stall guard bound it instead.

mod assemble;
mod progress;
mod save;

pub use assemble::assemble_chunks;
pub use progress::{DownloadPhase, NullSink, ProgressEvent, ProgressSink, ProgressTracker};
pub use save::deliver_to_file;

use std::cell::Cell;
use std::str;
use std::time::Duration;

use crate::error::TrackdlError;

const ACCEPT_AUDIO: &str = "Accept: audio/mpeg,audio/*;q=0.9,*/*;q=0.8";

/// Fetches `url` and returns the complete body.
///
/// Publishes phase transitions and percentage updates into `sink`. Fails on
/// non-2xx status, transport errors, and a zero-length body (a successful
/// status with an empty body is indistinguishable from silent upstream
/// failure and must not be presented as success).
///
/// Blocking; call from `spawn_blocking` if used from async code.
pub fn fetch_audio(url: &str, sink: &dyn ProgressSink) -> Result<Vec<u8>, TrackdlError> {
    sink.publish(ProgressEvent::Phase(DownloadPhase::Requesting));

    // Shared between the header and write callbacks; the last response's
    // Content-Length wins across redirect hops.
    let declared_total: Cell<Option<u64>> = Cell::new(None);
    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut tracker = ProgressTracker::new();
    let mut streaming_announced = false;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(TrackdlError::Network)?;
    easy.follow_location(true).map_err(TrackdlError::Network)?;
    easy.max_redirections(10).map_err(TrackdlError::Network)?;
    easy.connect_timeout(Duration::from_secs(30))
        .map_err(TrackdlError::Network)?;
    easy.low_speed_limit(1024).map_err(TrackdlError::Network)?;
    easy.low_speed_time(Duration::from_secs(60))
        .map_err(TrackdlError::Network)?;

    let mut list = curl::easy::List::new();
    list.append(ACCEPT_AUDIO).map_err(TrackdlError::Network)?;
    easy.http_headers(list).map_err(TrackdlError::Network)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|line| {
                if line.starts_with(b"HTTP/") {
                    declared_total.set(None);
                } else if let Some(len) = parse_content_length(line) {
                    declared_total.set(Some(len));
                }
                true
            })
            .map_err(|_| TrackdlError::StreamUnavailable)?;
        transfer
            .write_function(|data| {
                if !streaming_announced {
                    sink.publish(ProgressEvent::Phase(DownloadPhase::Streaming));
                    streaming_announced = true;
                }
                if let Some(percent) = tracker.record(data.len(), declared_total.get()) {
                    sink.publish(ProgressEvent::Received {
                        bytes: tracker.received(),
                        total: declared_total.get().unwrap_or(0),
                        percent,
                    });
                }
                chunks.push(data.to_vec());
                Ok(data.len())
            })
            .map_err(|_| TrackdlError::StreamUnavailable)?;
        transfer.perform().map_err(TrackdlError::Network)?;
    }

    let status = easy.response_code().map_err(TrackdlError::Network)?;
    if !(200..300).contains(&status) {
        tracing::debug!(status, url, "relayed GET returned non-2xx");
        return Err(TrackdlError::Http { status });
    }

    sink.publish(ProgressEvent::Phase(DownloadPhase::Assembling));
    let bytes = assemble_chunks(chunks);
    if bytes.is_empty() {
        return Err(TrackdlError::EmptyResult);
    }
    Ok(bytes)
}

/// Parses a `Content-Length` header line (case-insensitive); `None` for
/// anything else.
fn parse_content_length(line: &[u8]) -> Option<u64> {
    let line = str::from_utf8(line).ok()?;
    let (name, value) = line.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_content_length_basic() {
        assert_eq!(parse_content_length(b"Content-Length: 12345\r\n"), Some(12345));
        assert_eq!(parse_content_length(b"content-length:7"), Some(7));
    }

    #[test]
    fn parse_content_length_other_headers() {
        assert_eq!(parse_content_length(b"Content-Type: audio/mpeg\r\n"), None);
        assert_eq!(parse_content_length(b"HTTP/1.1 200 OK\r\n"), None);
        assert_eq!(parse_content_length(b"\r\n"), None);
    }

    #[test]
    fn parse_content_length_garbage_value() {
        assert_eq!(parse_content_length(b"Content-Length: lots\r\n"), None);
    }
}
