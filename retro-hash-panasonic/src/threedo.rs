//! 3DO recipe.
//!
//! 3DO discs use the Opera filesystem. The digest covers the 132-byte volume
//! header and the full contents of the `LaunchMe` boot executable, found by
//! walking the root directory blocks.

use std::path::Path;

use retro_hash_core::digest::hash_cd_file;
use retro_hash_core::util::read_ascii_fixed;
use retro_hash_core::{HashContext, HashError, Md5Digest, TrackSelector};

/// Volume header identifier at the start of sector 0.
const OPERA_IDENTIFIER: [u8; 7] = [0x01, 0x5A, 0x5A, 0x5A, 0x5A, 0x5A, 0x01];

/// 24-bit big-endian field whose leading byte is assumed zero.
fn be24(bytes: &[u8]) -> u32 {
    u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2])
}

pub fn hash_3do(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Number(1))?;
    let mut buffer = [0u8; 2048];

    // the volume information is the first 132 bytes of sector 0
    track.read_sector(0, &mut buffer[..132]);
    if buffer[..7] != OPERA_IDENTIFIER {
        return Err(HashError::invalid_format("Not a 3DO CD"));
    }

    log::debug!(
        "Found 3DO CD, title={}",
        read_ascii_fixed(&buffer[0x28..0x48])
    );

    // the volume header is part of the hash
    let mut digest = Md5Digest::new();
    digest.append(&buffer[..132]);

    // block size at 0x4C and root directory block location at 0x64, both
    // 24-bit big-endian with a zero leading byte; the root directory may be
    // duplicated but only the primary record is used
    let block_size = be24(&buffer[0x4D..0x50]);
    let dir_location = be24(&buffer[0x65..0x68]) * block_size;

    let mut sector = dir_location / 2048;
    let mut file_location = 0u32;
    let mut file_size = 0u32;

    loop {
        track.read_sector(sector, &mut buffer);

        // offsets to the first entry (0x10) and the end of entries (0x0C)
        let mut offset = (u32::from(buffer[0x12]) << 8 | u32::from(buffer[0x13])) as usize;
        let stop = (be24(&buffer[0x0D..0x10]) as usize).min(buffer.len());

        while offset + 0x48 <= buffer.len() && offset < stop {
            // entry type 0x02 is a plain file
            if buffer[offset + 0x03] == 0x02 && entry_name_is(&buffer, offset, b"LaunchMe") {
                let file_block_size = be24(&buffer[offset + 0x0D..offset + 0x10]);
                file_location = be24(&buffer[offset + 0x45..offset + 0x48]) * file_block_size;
                file_size = be24(&buffer[offset + 0x11..offset + 0x14]);

                log::debug!("Hashing header (132 bytes) and LaunchMe ({} bytes)", file_size);
                break;
            }

            // each entry is 0x48 bytes plus 4 per extra copy of the file
            offset += 0x48 + buffer[offset + 0x43] as usize * 4;
        }

        if file_size != 0 {
            break;
        }

        // the directory listing may continue in another block
        let next = u32::from(buffer[0x02]) << 8 | u32::from(buffer[0x03]);
        if next == 0xFFFF {
            break;
        }
        sector = (dir_location + next * block_size) / 2048;
    }

    if file_size == 0 {
        return Err(HashError::invalid_format("Could not find LaunchMe"));
    }

    let sector = file_location / 2048;
    hash_cd_file(&mut digest, &mut *track, sector, file_size, "LaunchMe")?;

    Ok(digest.finalize())
}

/// Directory entry names are NUL-terminated strings at entry offset 0x20,
/// compared case-insensitively.
fn entry_name_is(buffer: &[u8], offset: usize, name: &[u8]) -> bool {
    let field = &buffer[offset + 0x20..offset + 0x40];
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    field[..end].eq_ignore_ascii_case(name)
}

#[cfg(test)]
#[path = "tests/threedo_tests.rs"]
mod tests;
