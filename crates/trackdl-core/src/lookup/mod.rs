//! Track lookup API client.
//!
//! Resolves a track id to metadata plus a direct audio download link via a
//! paid third-party API. The request carries the fully-qualified
//! `open.spotify.com/track/<id>` URL as a query parameter and two static
//! credential headers. One attempt, bounded by the configured timeout; no
//! retry.

mod parse;

pub use parse::TrackMetadata;

use crate::config::TrackdlConfig;
use crate::error::TrackdlError;
use crate::track_ref::canonical_track_url;
use std::time::Duration;

/// Path of the lookup endpoint on the API host.
const LOOKUP_PATH: &str = "/downloadSong";

/// Client for the track lookup API.
pub struct LookupClient {
    api_host: String,
    api_key: String,
    timeout: Duration,
}

impl LookupClient {
    pub fn new(api_host: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_host: api_host.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    /// Builds a client from config. The credential must resolve from the
    /// environment or the config file; nothing is compiled in.
    pub fn from_config(cfg: &TrackdlConfig) -> Result<Self, TrackdlError> {
        let api_key = cfg.resolve_api_key().ok_or_else(|| {
            TrackdlError::Config(format!(
                "no API key: set {} or api_key in config.toml",
                crate::config::API_KEY_ENV
            ))
        })?;
        Ok(Self::new(
            cfg.api_host.clone(),
            api_key,
            Duration::from_secs(cfg.lookup_timeout_secs),
        ))
    }

    /// Resolves `track_id` to track metadata including the download link.
    ///
    /// Blocking; call from `spawn_blocking` if used from async code.
    pub fn lookup(&self, track_id: &str) -> Result<TrackMetadata, TrackdlError> {
        let endpoint = self.endpoint_url(track_id)?;
        tracing::debug!(%endpoint, "looking up track");

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&endpoint).map_err(TrackdlError::Network)?;
        easy.follow_location(true).map_err(TrackdlError::Network)?;
        easy.timeout(self.timeout).map_err(TrackdlError::Network)?;

        let mut list = curl::easy::List::new();
        list.append(&format!("x-rapidapi-key: {}", self.api_key))
            .map_err(TrackdlError::Network)?;
        list.append(&format!("x-rapidapi-host: {}", self.api_host))
            .map_err(TrackdlError::Network)?;
        list.append("Accept: application/json")
            .map_err(TrackdlError::Network)?;
        easy.http_headers(list).map_err(TrackdlError::Network)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(TrackdlError::Network)?;
            transfer.perform().map_err(|e| {
                if e.is_operation_timedout() {
                    TrackdlError::Timeout
                } else {
                    TrackdlError::Network(e)
                }
            })?;
        }

        let status = easy.response_code().map_err(TrackdlError::Network)?;
        if !(200..300).contains(&status) {
            tracing::debug!(status, "lookup returned non-2xx");
            return Err(TrackdlError::Http { status });
        }

        parse::parse_lookup_body(&body)
    }

    fn endpoint_url(&self, track_id: &str) -> Result<String, TrackdlError> {
        let base = format!("https://{}{}", self.api_host, LOOKUP_PATH);
        let mut endpoint = url::Url::parse(&base)
            .map_err(|e| TrackdlError::Config(format!("invalid api_host {:?}: {e}", self.api_host)))?;
        endpoint
            .query_pairs_mut()
            .append_pair("songId", &canonical_track_url(track_id));
        Ok(endpoint.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_carries_canonical_url_as_song_id() {
        let client = LookupClient::new(
            "spotify-downloader9.p.rapidapi.com",
            "k",
            Duration::from_secs(30),
        );
        let endpoint = client.endpoint_url("2gi4stMxjTzP10fUaU0U4t").unwrap();
        assert!(endpoint.starts_with("https://spotify-downloader9.p.rapidapi.com/downloadSong?"));
        assert!(endpoint
            .contains("songId=https%3A%2F%2Fopen.spotify.com%2Ftrack%2F2gi4stMxjTzP10fUaU0U4t"));
    }

    #[test]
    fn bad_api_host_is_config_error() {
        let client = LookupClient::new("not a host", "k", Duration::from_secs(30));
        assert!(matches!(
            client.endpoint_url("x").unwrap_err(),
            TrackdlError::Config(_)
        ));
    }
}
