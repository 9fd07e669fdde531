//! ISO-9660 file locator.
//!
//! Just enough of the filesystem to find one file: read the Primary Volume
//! Descriptor at sector 16, follow the root directory record, and scan
//! directory extents for a name. Several disc recipes use this to locate the
//! boot executable named by a platform's boot structure.

use crate::disc::DiscTrack;

/// Location and length of a file's extent inside a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileExtent {
    /// Absolute sector of the extent. Not yet track-translated; callers that
    /// read from a different track translate via
    /// [`DiscTrack::to_track_sector`].
    pub sector: u32,
    /// Extent length in bytes.
    pub size: u32,
}

/// Paths inside the supported discs are at most two segments deep; the bound
/// guards against cyclic directory records.
const MAX_PATH_DEPTH: u32 = 8;

/// Locate a file inside an ISO-9660 filesystem.
///
/// `path` uses backslashes as separators (`DIR\SUB\FILE.EXT`) and matches
/// case-insensitively against directory records with any `;version` suffix
/// trimmed. Returns `None` when any segment of the path is missing.
pub fn find_file_extent(track: &mut dyn DiscTrack, path: &str) -> Option<FileExtent> {
    find_in_directory(track, path, 0)
}

fn find_in_directory(track: &mut dyn DiscTrack, path: &str, depth: u32) -> Option<FileExtent> {
    if depth >= MAX_PATH_DEPTH {
        return None;
    }

    let mut buffer = [0u8; 2048];

    let (dir_sector, name) = match path.rsplit_once('\\') {
        Some((parent, name)) => {
            // the parent's extent is the directory to scan for the leaf
            let parent = find_in_directory(track, parent, depth + 1)?;
            (parent.sector, name)
        }
        None => {
            // the root directory record starts 156 bytes into the Primary
            // Volume Descriptor; the extent location is 2 bytes into that
            if track.read_sector(16, &mut buffer[..256]) < 256 {
                return None;
            }
            let root = u32::from(buffer[158])
                | u32::from(buffer[159]) << 8
                | u32::from(buffer[160]) << 16;
            (root, path)
        }
    };

    let dir_sector = track.to_track_sector(dir_sector)?;
    if track.read_sector(dir_sector, &mut buffer) == 0 {
        return None;
    }

    let mut offset = 0usize;
    while offset + 33 <= buffer.len() {
        // the first byte of a record is its length; zero ends the directory
        let record_len = buffer[offset] as usize;
        if record_len == 0 {
            return None;
        }

        // the identifier is "FILENAME;version" or "DIRECTORY"
        let name_len = buffer[offset + 32] as usize;
        if offset + 33 + name_len <= buffer.len() {
            let record_name = &buffer[offset + 33..offset + 33 + name_len];
            let record_name = match record_name.iter().position(|&b| b == b';') {
                Some(end) => &record_name[..end],
                None => record_name,
            };

            if record_name.eq_ignore_ascii_case(name.as_bytes()) {
                let sector = u32::from(buffer[offset + 2])
                    | u32::from(buffer[offset + 3]) << 8
                    | u32::from(buffer[offset + 4]) << 16;
                let size = u32::from_le_bytes([
                    buffer[offset + 10],
                    buffer[offset + 11],
                    buffer[offset + 12],
                    buffer[offset + 13],
                ]);

                log::debug!("Found {} at sector {}", name, sector);
                return Some(FileExtent { sector, size });
            }
        }

        offset += record_len;
    }

    None
}

#[cfg(test)]
#[path = "tests/iso9660_tests.rs"]
mod tests;
