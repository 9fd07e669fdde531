use std::path::Path;

use retro_hash_core::digest::{self, hash_cd_file};
use retro_hash_core::util::read_ascii_fixed;
use retro_hash_core::{
    DiscTrack, HashContext, HashError, MAX_BUFFER_SIZE, Md5Digest, TrackSelector, iso9660,
};

/// Boot header marker found 32 bytes into the second sector of the data
/// track on standard PC Engine CDs.
const PCE_CD_MARKER: &[u8; 23] = b"PC Engine CD-ROM SYSTEM";

/// Hash a PC Engine HuCard ROM, skipping a 512-byte emulator header when
/// present. ROM data comes in 128 KB units.
pub fn hash_pce_rom(buffer: &[u8]) -> String {
    let body = if buffer.len() % 0x20000 == 512 {
        log::debug!("Ignoring PCE header");
        &buffer[512..]
    } else {
        buffer
    };

    digest::hash_buffer(body)
}

/// Hash the first data track of a PC Engine CD.
pub fn hash_pce_cd(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::FirstData)?;
    hash_pce_track(&mut *track)
}

/// Hash a PC Engine CD from an already opened track.
///
/// Standard discs carry a boot block in sector 1 naming the program sectors
/// and a 22-byte title; both go into the digest. GameExpress discs use a
/// plain filesystem instead, so the fallback locates and hashes `BOOT.BIN`.
pub(crate) fn hash_pce_track(track: &mut dyn DiscTrack) -> Result<String, HashError> {
    let mut buffer = [0u8; 2048];

    if track.read_sector(1, &mut buffer[..128]) < 128 {
        return Err(HashError::invalid_format("Not a PC Engine CD"));
    }

    if &buffer[32..55] == PCE_CD_MARKER {
        log::debug!(
            "Found PC Engine CD, title={}",
            read_ascii_fixed(&buffer[106..128])
        );

        // the title is the last 22 bytes of the boot block
        let mut digest = Md5Digest::new();
        digest.append(&buffer[106..128]);

        // the first three bytes give the first program sector, the fourth
        // the sector count
        let mut sector =
            u32::from(buffer[0]) << 16 | u32::from(buffer[1]) << 8 | u32::from(buffer[2]);
        let mut num_sectors = buffer[3];

        log::debug!("Hashing {} sectors starting at sector {}", num_sectors, sector);
        while num_sectors > 0 {
            track.read_sector(sector, &mut buffer);
            digest.append(&buffer);
            sector += 1;
            num_sectors -= 1;
        }

        Ok(digest.finalize())
    } else if let Some(extent) = iso9660::find_file_extent(track, "BOOT.BIN")
        .filter(|extent| u64::from(extent.size) < MAX_BUFFER_SIZE)
    {
        let mut digest = Md5Digest::new();
        hash_cd_file(&mut digest, track, extent.sector, extent.size, "BOOT.BIN")?;
        Ok(digest.finalize())
    } else {
        Err(HashError::invalid_format("Not a PC Engine CD"))
    }
}

#[cfg(test)]
#[path = "tests/pce_tests.rs"]
mod tests;
