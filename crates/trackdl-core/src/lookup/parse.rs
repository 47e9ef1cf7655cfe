//! Parse the lookup API's JSON envelope into TrackMetadata.

use serde::Deserialize;

use crate::error::TrackdlError;

/// Resolved track metadata from the lookup API.
#[derive(Debug, Clone)]
pub struct TrackMetadata {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub release_date: String,
    /// Direct audio URL. Always non-empty; its absence is an
    /// `InvalidResponse` at parse time.
    pub download_link: String,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    data: Option<Payload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    album: String,
    #[serde(default)]
    cover: String,
    #[serde(default)]
    release_date: String,
    download_link: Option<String>,
}

/// Parse a lookup response body. `success == false`, malformed JSON, or a
/// missing/empty download link all map to `InvalidResponse`; a 2xx with an
/// unusable payload must not be presented as success.
pub(crate) fn parse_lookup_body(body: &[u8]) -> Result<TrackMetadata, TrackdlError> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("lookup body did not parse as JSON: {e}");
        TrackdlError::InvalidResponse
    })?;

    if !envelope.success {
        return Err(TrackdlError::InvalidResponse);
    }
    let payload = envelope.data.ok_or(TrackdlError::InvalidResponse)?;
    let download_link = payload
        .download_link
        .filter(|l| !l.is_empty())
        .ok_or(TrackdlError::InvalidResponse)?;

    Ok(TrackMetadata {
        id: payload.id,
        title: payload.title,
        artist: payload.artist,
        album: payload.album,
        cover: payload.cover,
        release_date: payload.release_date,
        download_link,
    })
}
