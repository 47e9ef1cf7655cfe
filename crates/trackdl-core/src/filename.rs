//! Local filename derivation for saved tracks.

/// Characters that are unsafe in filenames on at least one supported
/// filesystem; each is replaced by `_`.
const UNSAFE: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Derives the save name `"<title> - <artist>.mp3"`, replacing unsafe
/// characters one-for-one with `_`. Consumers do not re-validate the result.
pub fn track_filename(title: &str, artist: &str) -> String {
    let raw = format!("{title} - {artist}.mp3");
    raw.chars()
        .map(|c| if UNSAFE.contains(&c) { '_' } else { c })
        .collect()
}
