//! Whole-file hashers.
//!
//! Most cartridge systems are hashed as-is: the dump is the game. The
//! streamed variant never holds more than one chunk in memory; the buffered
//! variant loads the file for recipes that inspect a prefix before deciding
//! what to trim.

use std::io::SeekFrom;
use std::path::Path;

use retro_hash_core::reader::read_fill;
use retro_hash_core::{HashContext, HashError, MAX_BUFFER_SIZE, Md5Digest, Platform, path};

use crate::dispatch;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Stream a whole file (up to the 64 MiB cap) through MD5.
pub fn hash_whole_file(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let display = path.to_string_lossy();
    let mut file = ctx.open_file(path)?;
    let size = file.seek(SeekFrom::End(0))?;

    if size > MAX_BUFFER_SIZE {
        log::debug!(
            "Hashing first {} bytes (of {} bytes) of {}",
            MAX_BUFFER_SIZE,
            size,
            path::filename(&display)
        );
    } else {
        log::debug!("Hashing {} ({} bytes)", path::filename(&display), size);
    }

    let mut remaining = size.min(MAX_BUFFER_SIZE);
    let mut digest = Md5Digest::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    file.seek(SeekFrom::Start(0))?;
    while remaining > 0 {
        let want = remaining.min(CHUNK_SIZE as u64) as usize;
        let num_read = read_fill(&mut *file, &mut buffer[..want])?;
        if num_read == 0 {
            break;
        }
        digest.append(&buffer[..num_read]);
        remaining -= num_read as u64;
    }

    Ok(digest.finalize())
}

/// Load a file (up to the cap) and hand it to the buffer dispatcher.
pub fn hash_buffered_file(
    ctx: &HashContext,
    console: Platform,
    path: &Path,
) -> Result<String, HashError> {
    let display = path.to_string_lossy();
    let mut file = ctx.open_file(path)?;
    let size = file.seek(SeekFrom::End(0))?;

    if size > MAX_BUFFER_SIZE {
        log::debug!(
            "Buffering first {} bytes (of {} bytes) of {}",
            MAX_BUFFER_SIZE,
            size,
            path::filename(&display)
        );
    } else {
        log::debug!("Buffering {} ({} bytes)", path::filename(&display), size);
    }

    let mut buffer = vec![0u8; size.min(MAX_BUFFER_SIZE) as usize];
    file.seek(SeekFrom::Start(0))?;
    let num_read = read_fill(&mut *file, &mut buffer)?;
    buffer.truncate(num_read);

    dispatch::hash_from_buffer(console, &buffer)
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
