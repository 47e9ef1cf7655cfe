//! CLI for the trackdl Spotify track fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trackdl_core::config;

use commands::{run_get, run_id, run_resolve};

/// Top-level CLI for the trackdl track fetcher.
#[derive(Debug, Parser)]
#[command(name = "trackdl")]
#[command(about = "trackdl: fetch a Spotify track as a local mp3", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a track URL and download the audio as an mp3.
    Get {
        /// Spotify track URL or spotify:track: URI.
        url: String,
        /// Directory to save into (default: current directory).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Resolve a track URL and print its metadata without downloading.
    Resolve {
        /// Spotify track URL or spotify:track: URI.
        url: String,
    },

    /// Print the track id extracted from a URL or URI.
    Id {
        /// Spotify track URL or spotify:track: URI.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        // Not the whole struct: the config may hold the API credential.
        tracing::debug!(
            api_host = %cfg.api_host,
            relay_url = %cfg.relay_url,
            lookup_timeout_secs = cfg.lookup_timeout_secs,
            "loaded config"
        );

        match cli.command {
            CliCommand::Get { url, download_dir } => {
                let dir = match download_dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_get(cfg, url, dir).await?;
            }
            CliCommand::Resolve { url } => run_resolve(cfg, url).await?,
            CliCommand::Id { url } => run_id(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
