//! Error taxonomy for the lookup and download pipeline.
//!
//! Every failure a single run can hit is one of these variants; the CLI
//! converts them to one human-readable line via [`TrackdlError::user_message`].

use thiserror::Error;

/// Failure of a single lookup-and-download run.
#[derive(Debug, Error)]
pub enum TrackdlError {
    /// No track reference could be extracted from the user's input.
    #[error("input does not contain a Spotify track reference")]
    Validation,

    /// Lookup or relay returned a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },

    /// The lookup call exceeded its configured time bound.
    #[error("lookup request timed out")]
    Timeout,

    /// Lookup answered 2xx but the payload is unusable (success=false,
    /// malformed JSON, or no download link).
    #[error("lookup response is missing required fields")]
    InvalidResponse,

    /// The transfer could not expose an incremental body stream.
    #[error("response body is not incrementally readable")]
    StreamUnavailable,

    /// The assembled body was zero bytes despite a successful status.
    #[error("downloaded file is empty")]
    EmptyResult,

    /// Transport-level failure (DNS, connect, TLS, mid-stream abort).
    #[error("network error: {0}")]
    Network(#[source] curl::Error),

    /// Local file write/rename failed.
    #[error("storage error: {0}")]
    Storage(#[source] std::io::Error),

    /// Configuration is missing or unusable (e.g. no API key, bad relay URL).
    #[error("configuration error: {0}")]
    Config(String),
}

impl TrackdlError {
    /// One-line message suitable for showing to the user.
    ///
    /// Specific HTTP statuses get dedicated wording; everything else falls
    /// back to a generic line. The caller is expected to log the technical
    /// error separately.
    pub fn user_message(&self) -> String {
        match self {
            TrackdlError::Validation => {
                "Please enter a valid Spotify track URL".to_string()
            }
            TrackdlError::Http { status: 429 } => {
                "Too many requests. Please try again later.".to_string()
            }
            TrackdlError::Http { status: 403 } => {
                "Access denied. Please check your API key.".to_string()
            }
            TrackdlError::Http { status: 404 } => {
                "Song not found. Please check the URL.".to_string()
            }
            TrackdlError::Http { status } => {
                format!("The server responded with HTTP {status}. Please try again.")
            }
            TrackdlError::Timeout => "Request timed out. Please try again.".to_string(),
            TrackdlError::InvalidResponse => {
                "Invalid response from server".to_string()
            }
            TrackdlError::StreamUnavailable => {
                "Unable to read the response".to_string()
            }
            TrackdlError::EmptyResult => "Downloaded file is empty".to_string(),
            TrackdlError::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            TrackdlError::Storage(_) => {
                "Could not save the file to disk.".to_string()
            }
            TrackdlError::Config(msg) => format!("Configuration problem: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_specific_messages() {
        assert_eq!(
            TrackdlError::Http { status: 403 }.user_message(),
            "Access denied. Please check your API key."
        );
        assert_eq!(
            TrackdlError::Http { status: 404 }.user_message(),
            "Song not found. Please check the URL."
        );
        assert_eq!(
            TrackdlError::Http { status: 429 }.user_message(),
            "Too many requests. Please try again later."
        );
    }

    #[test]
    fn http_status_generic_fallback() {
        let msg = TrackdlError::Http { status: 500 }.user_message();
        assert!(msg.contains("500"));
    }

    #[test]
    fn timeout_message() {
        assert_eq!(
            TrackdlError::Timeout.user_message(),
            "Request timed out. Please try again."
        );
    }
}
