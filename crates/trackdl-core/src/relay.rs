//! Pass-through relay URL construction.
//!
//! The audio host does not send permissive CORS headers and sits behind
//! geo/rate gates, so the GET goes through a public relay that forwards the
//! bytes unmodified. The relay takes the target URL as a query-encoded
//! parameter. An unreachable or rate-limited relay surfaces as an ordinary
//! network/HTTP failure downstream; there is no fallback path.

use crate::error::TrackdlError;

/// Query parameter the relay reads the target URL from.
const TARGET_PARAM: &str = "quest";

/// Builds the relayed form of `target` on top of `relay_base`.
///
/// `relay_base` comes from config; a base that does not parse as a URL is a
/// configuration error, not a network one.
pub fn relay_url(relay_base: &str, target: &str) -> Result<String, TrackdlError> {
    let mut relayed = url::Url::parse(relay_base)
        .map_err(|e| TrackdlError::Config(format!("invalid relay_url {relay_base:?}: {e}")))?;
    relayed
        .query_pairs_mut()
        .append_pair(TARGET_PARAM, target);
    Ok(relayed.into())
}
