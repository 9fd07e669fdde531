//! Nintendo DS recipe.
//!
//! A DS card image is far larger than the parts that identify the game, so
//! the digest covers the first 0x160 bytes of the header, the ARM9 and ARM7
//! code blocks, and the 0xA00-byte icon/title block.

use std::io::SeekFrom;
use std::path::Path;

use retro_hash_core::reader::read_fill;
use retro_hash_core::{HashContext, HashError, Md5Digest};

/// SuperCard shell images prepend 512 bytes in front of the real header.
const SUPERCARD_BRANCH: [u8; 4] = [0x2E, 0x00, 0x00, 0xEA];
const SUPERCARD_MAGIC: [u8; 4] = [0x44, 0x46, 0x96, 0x00];

/// Combined ARM9+ARM7 code is typically well under 1 MB each; anything past
/// this is not a DS ROM.
const MAX_CODE_SIZE: u32 = 16 * 1024 * 1024;

/// Icon/title block size.
const ICON_SIZE: usize = 0xA00;

pub fn hash_nintendo_ds(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut file = ctx.open_file(path)?;

    let mut header = [0u8; 512];
    file.seek(SeekFrom::Start(0))?;
    if read_fill(&mut *file, &mut header)? != header.len() {
        return Err(HashError::cannot_read("header"));
    }

    let mut base = 0u64;
    if header[..4] == SUPERCARD_BRANCH && header[0xB0..0xB4] == SUPERCARD_MAGIC {
        log::debug!("Ignoring SuperCard header");

        base = 512;
        file.seek(SeekFrom::Start(base))?;
        if read_fill(&mut *file, &mut header)? != header.len() {
            return Err(HashError::cannot_read("header"));
        }
    }

    let le32 = |offset: usize| {
        u32::from_le_bytes([
            header[offset],
            header[offset + 1],
            header[offset + 2],
            header[offset + 3],
        ])
    };
    let arm9_addr = le32(0x20);
    let arm9_size = le32(0x2C);
    let arm7_addr = le32(0x30);
    let arm7_size = le32(0x3C);
    let icon_addr = le32(0x68);

    if arm9_size.saturating_add(arm7_size) > MAX_CODE_SIZE {
        return Err(HashError::invalid_format(format!(
            "arm9 code size ({}) + arm7 code size ({}) exceeds 16MB",
            arm9_size, arm7_size
        )));
    }

    let buffer_size = (ICON_SIZE as u32).max(arm9_size).max(arm7_size) as usize;
    let mut buffer = vec![0u8; buffer_size];

    let mut digest = Md5Digest::new();

    log::debug!("Hashing 352 byte header");
    digest.append(&header[..0x160]);

    log::debug!("Hashing {} byte arm9 code (at {:08X})", arm9_size, arm9_addr);
    file.seek(SeekFrom::Start(u64::from(arm9_addr) + base))?;
    let arm9 = &mut buffer[..arm9_size as usize];
    arm9.fill(0);
    read_fill(&mut *file, arm9)?;
    digest.append(arm9);

    log::debug!("Hashing {} byte arm7 code (at {:08X})", arm7_size, arm7_addr);
    file.seek(SeekFrom::Start(u64::from(arm7_addr) + base))?;
    let arm7 = &mut buffer[..arm7_size as usize];
    arm7.fill(0);
    read_fill(&mut *file, arm7)?;
    digest.append(arm7);

    log::debug!("Hashing 2560 byte icon and labels data (at {:08X})", icon_addr);
    file.seek(SeekFrom::Start(u64::from(icon_addr) + base))?;
    let icon = &mut buffer[..ICON_SIZE];
    icon.fill(0);
    let num_read = read_fill(&mut *file, icon)?;
    if num_read < ICON_SIZE {
        // some homebrew carts end right after the code blocks; the icon
        // block is hashed zero-padded to full size
        log::debug!(
            "Warning: only got {} bytes for icon and labels data, 0-padding to 2560 bytes",
            num_read
        );
    }
    digest.append(icon);

    Ok(digest.finalize())
}

#[cfg(test)]
#[path = "tests/ds_tests.rs"]
mod tests;
