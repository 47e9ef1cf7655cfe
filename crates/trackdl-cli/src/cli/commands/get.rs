//! `trackdl get <url>` – resolve a track and download it.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use trackdl_core::config::TrackdlConfig;
use trackdl_core::downloader::{DownloadPhase, ProgressEvent, ProgressSink};
use trackdl_core::job;

/// Bridges the core's progress sink onto a tokio channel so the async side
/// can render updates while the download runs on a blocking thread.
struct ChannelSink(tokio::sync::mpsc::UnboundedSender<ProgressEvent>);

impl ProgressSink for ChannelSink {
    fn publish(&self, event: ProgressEvent) {
        let _ = self.0.send(event);
    }
}

pub async fn run_get(cfg: TrackdlConfig, url: String, download_dir: PathBuf) -> Result<()> {
    println!("Fetching track information...");

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<ProgressEvent>();
    let render = tokio::spawn(async move {
        let mut printed_percent = false;
        while let Some(event) = rx.recv().await {
            match event {
                ProgressEvent::Phase(DownloadPhase::Requesting) => {
                    println!("Starting download...");
                }
                ProgressEvent::Received { percent, .. } => {
                    print!("\r  downloading: {percent:>3}%");
                    let _ = std::io::stdout().flush();
                    printed_percent = true;
                }
                ProgressEvent::Phase(phase) if phase.is_terminal() || phase == DownloadPhase::Assembling => {
                    if printed_percent {
                        println!();
                        printed_percent = false;
                    }
                }
                _ => {}
            }
        }
    });

    let worker = tokio::task::spawn_blocking(move || {
        let sink = ChannelSink(tx);
        job::run_track_download(&cfg, &url, &download_dir, &sink)
    });

    let result = worker.await?;
    let _ = render.await;

    match result {
        Ok(saved) => {
            println!("Saved: {}", saved.path.display());
            println!("  {} - {} ({} bytes)", saved.metadata.title, saved.metadata.artist, saved.bytes_written);
            println!("Resolved source (for a repeat download): {}", saved.metadata.download_link);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "get failed");
            anyhow::bail!("{}", err.user_message())
        }
    }
}
