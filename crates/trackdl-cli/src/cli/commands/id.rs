//! `trackdl id <url>` – print the extracted track id.

use anyhow::Result;
use trackdl_core::track_ref;
use trackdl_core::TrackdlError;

pub fn run_id(url: &str) -> Result<()> {
    match track_ref::extract_track_id(url) {
        Some(id) => {
            println!("{id}");
            Ok(())
        }
        None => anyhow::bail!("{}", TrackdlError::Validation.user_message()),
    }
}
