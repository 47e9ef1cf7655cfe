//! Orchestration of one lookup-and-download run.
//!
//! Extract the track reference, resolve it through the lookup API, stream
//! the audio through the relay, and deliver the file. One invocation owns
//! no state shared with any other; a second call while one runs is simply
//! two independent operations.

use std::path::{Path, PathBuf};

use crate::config::TrackdlConfig;
use crate::downloader::{self, DownloadPhase, ProgressEvent, ProgressSink};
use crate::error::TrackdlError;
use crate::filename::track_filename;
use crate::lookup::{LookupClient, TrackMetadata};
use crate::relay::relay_url;
use crate::track_ref::extract_track_id;

/// Outcome of a successful run. Keeps the resolved download link so the
/// caller can offer a repeat download of the same resource.
#[derive(Debug, Clone)]
pub struct SavedTrack {
    pub metadata: TrackMetadata,
    pub file_name: String,
    pub path: PathBuf,
    pub bytes_written: u64,
}

/// Resolves `input` to track metadata without downloading anything.
pub fn resolve_track(cfg: &TrackdlConfig, input: &str) -> Result<TrackMetadata, TrackdlError> {
    let track_id = extract_track_id(input).ok_or(TrackdlError::Validation)?;
    let client = LookupClient::from_config(cfg)?;
    client.lookup(&track_id)
}

/// Runs the full flow and saves the track under `download_dir`.
///
/// Every failure path publishes `Failed` into `sink` before returning; the
/// happy path ends with `Saved`. Blocking; call from `spawn_blocking` if
/// used from async code.
pub fn run_track_download(
    cfg: &TrackdlConfig,
    input: &str,
    download_dir: &Path,
    sink: &dyn ProgressSink,
) -> Result<SavedTrack, TrackdlError> {
    match run_inner(cfg, input, download_dir, sink) {
        Ok(saved) => Ok(saved),
        Err(err) => {
            tracing::debug!(error = %err, "track download failed");
            sink.publish(ProgressEvent::Phase(DownloadPhase::Failed));
            Err(err)
        }
    }
}

fn run_inner(
    cfg: &TrackdlConfig,
    input: &str,
    download_dir: &Path,
    sink: &dyn ProgressSink,
) -> Result<SavedTrack, TrackdlError> {
    let track_id = extract_track_id(input).ok_or(TrackdlError::Validation)?;
    tracing::info!(%track_id, "resolving track");

    let client = LookupClient::from_config(cfg)?;
    let metadata = client.lookup(&track_id)?;
    tracing::info!(title = %metadata.title, artist = %metadata.artist, "track resolved");

    let file_name = track_filename(&metadata.title, &metadata.artist);
    let relayed = relay_url(&cfg.relay_url, &metadata.download_link)?;

    let bytes = downloader::fetch_audio(&relayed, sink)?;

    let path = download_dir.join(&file_name);
    downloader::deliver_to_file(&bytes, &path)?;
    sink.publish(ProgressEvent::Phase(DownloadPhase::Saved));
    tracing::info!(path = %path.display(), bytes = bytes.len(), "track saved");

    Ok(SavedTrack {
        metadata,
        file_name,
        path,
        bytes_written: bytes.len() as u64,
    })
}
