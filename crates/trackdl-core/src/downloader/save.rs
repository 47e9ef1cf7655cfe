//! File delivery: scoped handle, write, sync, atomic rename.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::TrackdlError;

/// Writes `bytes` to `final_path` via a `.part` sibling.
///
/// The file handle is owned exclusively by this call and released
/// unconditionally before the rename; a failed write removes the partial
/// file instead of leaving it behind.
pub fn deliver_to_file(bytes: &[u8], final_path: &Path) -> Result<(), TrackdlError> {
    let part_path = part_path_for(final_path);

    if let Err(err) = write_part(bytes, &part_path) {
        let _ = fs::remove_file(&part_path);
        return Err(TrackdlError::Storage(err));
    }

    fs::rename(&part_path, final_path).map_err(|err| {
        let _ = fs::remove_file(&part_path);
        TrackdlError::Storage(err)
    })
}

fn write_part(bytes: &[u8], part_path: &Path) -> std::io::Result<()> {
    let mut file = File::create(part_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

fn part_path_for(final_path: &Path) -> PathBuf {
    let name = final_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string());
    final_path.with_file_name(format!("{name}.part"))
}
