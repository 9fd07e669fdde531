use std::path::Path;

use retro_hash_core::digest::hash_cd_file;
use retro_hash_core::{HashContext, HashError, Md5Digest, TrackSelector};

use crate::system_cnf::find_boot_executable;

/// Hash a PlayStation 2 disc.
///
/// The primary executable is named by the `BOOT2` line of SYSTEM.CNF. The
/// filesystem-reported size is hashed even when the ELF headers disagree.
pub fn hash_ps2(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Number(1))?;

    let Some(exe) = find_boot_executable(&mut *track, "BOOT2", "cdrom0:") else {
        return Err(HashError::invalid_format(
            "Could not locate primary executable",
        ));
    };

    let mut buffer = [0u8; 4];
    if track.read_sector(exe.extent.sector, &mut buffer) < buffer.len() {
        return Err(HashError::cannot_read("primary executable"));
    }

    if buffer != [0x7F, 0x45, 0x4C, 0x46] {
        log::debug!("{} did not contain ELF marker", exe.name);
    }

    let mut digest = Md5Digest::new();
    digest.append(exe.name.as_bytes());

    hash_cd_file(
        &mut digest,
        &mut *track,
        exe.extent.sector,
        exe.extent.size,
        "primary executable",
    )?;

    Ok(digest.finalize())
}

#[cfg(test)]
#[path = "tests/ps2_tests.rs"]
mod tests;
