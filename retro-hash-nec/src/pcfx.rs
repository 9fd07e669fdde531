use std::path::Path;

use retro_hash_core::util::read_ascii_fixed;
use retro_hash_core::{HashContext, HashError, Md5Digest, TrackSelector};

use crate::pce::hash_pce_track;

/// Header marker in sector 0 of the track carrying the PC-FX executable.
const PCFX_MARKER: &[u8; 15] = b"PC-FX:Hu_CD-ROM";

/// Hash a PC-FX CD.
///
/// The executable can live in any track; the largest data track is checked
/// first, then track 2. Discs that identify as PC Engine CDs instead are
/// handed to the PC Engine recipe.
pub fn hash_pcfx_cd(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Largest)?;
    let mut buffer = [0u8; 2048];

    track.read_sector(0, &mut buffer[..32]);
    if &buffer[..15] != PCFX_MARKER {
        track = ctx.open_track(path, TrackSelector::Number(2))?;
        track.read_sector(0, &mut buffer[..32]);
    }

    if &buffer[..15] == PCFX_MARKER {
        // the boot header fills the first two sectors; the first 128 bytes
        // of the second sector hold the title and the program location
        track.read_sector(1, &mut buffer[..128]);

        let mut digest = Md5Digest::new();
        digest.append(&buffer[..128]);

        log::debug!("Found PC-FX CD, title={}", read_ascii_fixed(&buffer[..32]));

        // program sector and sector count are 24-bit little-endian fields
        // at bytes 32 and 36
        let mut sector =
            u32::from(buffer[32]) | u32::from(buffer[33]) << 8 | u32::from(buffer[34]) << 16;
        let mut num_sectors =
            u32::from(buffer[36]) | u32::from(buffer[37]) << 8 | u32::from(buffer[38]) << 16;

        log::debug!("Hashing {} sectors starting at sector {}", num_sectors, sector);
        while num_sectors > 0 {
            track.read_sector(sector, &mut buffer);
            digest.append(&buffer);
            sector += 1;
            num_sectors -= 1;
        }

        Ok(digest.finalize())
    } else {
        // some PC-FX CDs still identify as PC Engine CDs
        track.read_sector(1, &mut buffer[..128]);
        if &buffer[32..55] == b"PC Engine CD-ROM SYSTEM" {
            if let Ok(hash) = hash_pce_track(&mut *track) {
                return Ok(hash);
            }
        }

        Err(HashError::invalid_format("Not a PC-FX CD"))
    }
}

#[cfg(test)]
#[path = "tests/pcfx_tests.rs"]
mod tests;
