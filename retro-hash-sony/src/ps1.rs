use std::path::Path;

use retro_hash_core::digest::hash_cd_file;
use retro_hash_core::{HashContext, HashError, Md5Digest, TrackSelector, iso9660};

use crate::system_cnf::{BootExecutable, find_boot_executable};

/// Hash a PlayStation disc.
///
/// The primary executable is named by the `BOOT` line of SYSTEM.CNF, with
/// `PSX.EXE` as the conventional fallback. The PS-X EXE header states the
/// executable size without the 2048-byte header itself; the header is
/// included, so that value plus 2048 is hashed. Executables without the
/// marker fall back to the size the filesystem reports.
pub fn hash_psx(ctx: &HashContext, path: &Path) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Number(1))?;

    let exe = find_boot_executable(&mut *track, "BOOT", "cdrom:").or_else(|| {
        iso9660::find_file_extent(&mut *track, "PSX.EXE").map(|extent| BootExecutable {
            name: "PSX.EXE".to_string(),
            extent,
        })
    });
    let Some(exe) = exe else {
        return Err(HashError::invalid_format(
            "Could not locate primary executable",
        ));
    };

    let mut buffer = [0u8; 32];
    if track.read_sector(exe.extent.sector, &mut buffer) < buffer.len() {
        return Err(HashError::cannot_read("primary executable"));
    }

    let mut size = exe.extent.size;
    if &buffer[..8] == b"PS-X EXE" {
        size = u32::from_le_bytes([buffer[28], buffer[29], buffer[30], buffer[31]]) + 2048;
    } else {
        log::debug!("{} did not contain PS-X EXE marker", exe.name);
    }

    // the executable name is part of the identity: engine-sharing games
    // differ only by their serial-numbered boot file
    let mut digest = Md5Digest::new();
    digest.append(exe.name.as_bytes());

    hash_cd_file(
        &mut digest,
        &mut *track,
        exe.extent.sector,
        size,
        "primary executable",
    )?;

    Ok(digest.finalize())
}

#[cfg(test)]
#[path = "tests/ps1_tests.rs"]
mod tests;
