//! Dreamcast recipe.
//!
//! Track 3 carries the IP.BIN block with the game metadata and the boot
//! executable name. The digest covers the 256-byte metadata block plus the
//! boot executable, which usually lives in the last track.

use std::path::Path;

use retro_hash_core::digest::hash_cd_file;
use retro_hash_core::util::read_ascii_fixed;
use retro_hash_core::{HashContext, HashError, Md5Digest, TrackSelector, iso9660};

pub fn hash_dreamcast(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Number(3))?;

    let mut buffer = [0u8; 256];
    track.read_sector(0, &mut buffer);

    if &buffer[..16] != b"SEGA SEGAKATANA " {
        return Err(HashError::invalid_format("Not a Dreamcast CD"));
    }

    log::debug!(
        "Found Dreamcast CD: {} ({})",
        read_ascii_fixed(&buffer[0x80..0x100]),
        read_ascii_fixed(&buffer[0x40..0x50])
    );

    // the game metadata seeds the hash
    let mut digest = Md5Digest::new();
    digest.append(&buffer);

    // the boot filename is 96 bytes into the metadata, space-padded
    let name_field = &buffer[96..112];
    let name_len = name_field
        .iter()
        .position(|&b| b.is_ascii_whitespace())
        .unwrap_or(name_field.len());
    if name_len == 0 {
        // nothing can be done; even the console will not boot such a disc
        return Err(HashError::invalid_format(
            "Boot executable not specified on IP.BIN",
        ));
    }
    let exe_name = String::from_utf8_lossy(&name_field[..name_len]).into_owned();

    let extent = iso9660::find_file_extent(&mut *track, &exe_name)
        .ok_or_else(|| HashError::invalid_format("Could not locate boot executable"))?;
    drop(track);

    // the boot executable is normally in the last track; a handful of
    // discs keep it in the primary data track instead
    let mut exe_track = ctx.open_track(path, TrackSelector::Last)?;
    let mut track_sector = exe_track.to_track_sector(extent.sector);
    if track_sector.is_none() {
        log::debug!("Boot executable not found in last track, trying primary track");
        exe_track = ctx.open_track(path, TrackSelector::Number(3))?;
        track_sector = exe_track.to_track_sector(extent.sector);
    }
    let Some(track_sector) = track_sector else {
        return Err(HashError::cannot_read("boot executable"));
    };

    hash_cd_file(
        &mut digest,
        &mut *exe_track,
        track_sector,
        extent.size,
        "boot executable",
    )?;

    Ok(digest.finalize())
}

#[cfg(test)]
#[path = "tests/dreamcast_tests.rs"]
mod tests;
