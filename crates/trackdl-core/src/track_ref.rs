//! Spotify track reference extraction.
//!
//! Accepts both surface forms the official client hands out:
//! `https://open.spotify.com/track/<id>?si=...` and `spotify:track:<id>`.
//! No attempt is made to validate the rest of the input as a URL.

const TOKEN: &str = "track";

/// Extracts a track id from free-form input.
///
/// Finds the literal token `track` followed by `/` or `:` and captures the
/// maximal run of ASCII alphanumerics after the separator. The first
/// non-empty capture wins. Returns `None` when no such capture exists.
pub fn extract_track_id(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut search_from = 0;

    while let Some(pos) = input[search_from..].find(TOKEN) {
        let sep_idx = search_from + pos + TOKEN.len();
        search_from = search_from + pos + 1;

        match bytes.get(sep_idx) {
            Some(b'/') | Some(b':') => {}
            _ => continue,
        }

        let id: String = input[sep_idx + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if !id.is_empty() {
            return Some(id);
        }
    }

    tracing::debug!(input, "no track reference found");
    None
}

/// True iff `extract_track_id` yields a non-empty id for this input.
pub fn is_track_reference(input: &str) -> bool {
    extract_track_id(input).is_some()
}

/// Fully-qualified track URL in the form the lookup API expects.
pub fn canonical_track_url(track_id: &str) -> String {
    format!("https://open.spotify.com/track/{track_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_share_url() {
        assert_eq!(
            extract_track_id("https://open.spotify.com/track/2gi4stMxjTzP10fUaU0U4t?si=abc")
                .as_deref(),
            Some("2gi4stMxjTzP10fUaU0U4t")
        );
    }

    #[test]
    fn extracts_from_uri_form() {
        assert_eq!(
            extract_track_id("spotify:track:4uLU6hMCjMI75M1A2tKUQC").as_deref(),
            Some("4uLU6hMCjMI75M1A2tKUQC")
        );
    }

    #[test]
    fn stops_at_query_string() {
        assert_eq!(
            extract_track_id("https://open.spotify.com/track/abc123?si=xyz&x=1").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn playlist_url_is_not_a_track() {
        assert_eq!(extract_track_id("https://open.spotify.com/playlist/xyz"), None);
        assert!(!is_track_reference("https://open.spotify.com/playlist/xyz"));
    }

    #[test]
    fn bare_token_without_separator() {
        assert_eq!(extract_track_id("trackabc"), None);
        assert_eq!(extract_track_id("soundtrack"), None);
    }

    #[test]
    fn separator_followed_by_nothing_alphanumeric() {
        assert_eq!(extract_track_id("https://open.spotify.com/track/"), None);
        assert_eq!(extract_track_id("spotify:track:?"), None);
    }

    #[test]
    fn first_match_wins_when_a_later_one_exists() {
        assert_eq!(
            extract_track_id("track/first and also track/second").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn skips_empty_capture_and_takes_next() {
        // "track/" with no id is passed over in favor of the next occurrence.
        assert_eq!(extract_track_id("track/?x track:realid9").as_deref(), Some("realid9"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract_track_id(""), None);
        assert!(!is_track_reference(""));
    }

    #[test]
    fn canonical_url_form() {
        assert_eq!(
            canonical_track_url("2gi4stMxjTzP10fUaU0U4t"),
            "https://open.spotify.com/track/2gi4stMxjTzP10fUaU0U4t"
        );
    }
}
