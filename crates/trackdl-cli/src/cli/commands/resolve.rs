//! `trackdl resolve <url>` – look up a track without downloading.

use anyhow::Result;
use trackdl_core::config::TrackdlConfig;
use trackdl_core::filename::track_filename;
use trackdl_core::job;

pub async fn run_resolve(cfg: TrackdlConfig, url: String) -> Result<()> {
    let resolved = tokio::task::spawn_blocking(move || job::resolve_track(&cfg, &url)).await?;

    match resolved {
        Ok(meta) => {
            println!("Title:        {}", meta.title);
            println!("Artist:       {}", meta.artist);
            println!("Album:        {}", meta.album);
            println!("Released:     {}", meta.release_date);
            println!("Cover:        {}", meta.cover);
            println!("Download URL: {}", meta.download_link);
            println!("Save name:    {}", track_filename(&meta.title, &meta.artist));
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "resolve failed");
            anyhow::bail!("{}", err.user_message())
        }
    }
}
