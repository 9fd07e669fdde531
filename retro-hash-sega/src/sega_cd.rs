use std::path::Path;

use retro_hash_core::{HashContext, HashError, TrackSelector, digest};

/// Hash a Sega CD or Saturn disc.
///
/// The first 512 bytes of sector 0 are the volume and ROM headers, which
/// uniquely identify the game. The code that follows varies by region and
/// loads any of several executables, so the headers alone are hashed.
pub fn hash_sega_cd(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Number(1))?;

    let mut buffer = [0u8; 512];
    track.read_sector(0, &mut buffer);

    if &buffer[..16] != b"SEGADISCSYSTEM  " && &buffer[..16] != b"SEGA SEGASATURN " {
        return Err(HashError::invalid_format("Not a Sega CD"));
    }

    Ok(digest::hash_buffer(&buffer))
}

#[cfg(test)]
#[path = "tests/sega_cd_tests.rs"]
mod tests;
