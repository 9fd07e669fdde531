//! m3u playlist resolution.
//!
//! Multi-disc games ship as a playlist naming one image per line. Hashing
//! the playlist means hashing the first disc, so the fingerprint matches a
//! direct invocation on that image.

use std::path::{Path, PathBuf};

use retro_hash_core::reader::read_fill;
use retro_hash_core::{HashContext, HashError, path};

/// Read the first disc entry from an m3u playlist.
///
/// Examines at most the first 1024 bytes. Blank lines and `#` comments are
/// skipped and trailing whitespace is stripped. A relative entry is resolved
/// against the playlist's own directory; the caller owns the result.
pub fn first_playlist_entry(ctx: &HashContext, m3u_path: &Path) -> Result<PathBuf, HashError> {
    let mut file = ctx
        .open_file(m3u_path)
        .map_err(|_| HashError::cannot_open("playlist"))?;

    let mut buffer = [0u8; 1024];
    let num_read = read_fill(&mut *file, &mut buffer)?;
    let text = String::from_utf8_lossy(&buffer[..num_read]);

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        log::debug!("Extracted {} from playlist", line);

        if path::is_absolute(line) {
            return Ok(PathBuf::from(line));
        }

        let playlist = m3u_path.to_string_lossy();
        let dir_len = playlist.len() - path::filename(&playlist).len();
        return Ok(PathBuf::from(format!("{}{}", &playlist[..dir_len], line)));
    }

    Err(HashError::EmptyPlaylist)
}

#[cfg(test)]
#[path = "tests/playlist_tests.rs"]
mod tests;
