//! SYSTEM.CNF boot-line scanning shared by the PS1 and PS2 recipes.

use retro_hash_core::iso9660::{self, FileExtent};
use retro_hash_core::DiscTrack;

pub(crate) struct BootExecutable {
    pub name: String,
    pub extent: FileExtent,
}

/// Locate the primary executable named by SYSTEM.CNF.
///
/// Scans for a `<boot_key> = <path>` line; the value tolerates whitespace
/// around the `=`, an optional `cdrom:`-style device prefix, an optional
/// leading backslash, and a `;version` suffix. Returns `None` when
/// SYSTEM.CNF is missing, carries no boot line, or names a file that is not
/// on the disc.
pub(crate) fn find_boot_executable(
    track: &mut dyn DiscTrack,
    boot_key: &str,
    cdrom_prefix: &str,
) -> Option<BootExecutable> {
    let cnf = iso9660::find_file_extent(track, "SYSTEM.CNF")?;

    let mut buffer = [0u8; 2048];
    let num_read = track.read_sector(cnf.sector, &mut buffer[..2047]);
    let text = String::from_utf8_lossy(&buffer[..num_read]);

    for line in text.lines() {
        let Some(rest) = line.trim_start().strip_prefix(boot_key) else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(value) = rest.strip_prefix('=') else {
            continue;
        };

        let value = value.trim_start();
        let value = value.strip_prefix(cdrom_prefix).unwrap_or(value);
        let value = value.strip_prefix('\\').unwrap_or(value);

        let end = value
            .find(|c: char| c.is_whitespace() || c == ';')
            .unwrap_or(value.len());
        let name = &value[..end];

        log::debug!("Looking for boot executable: {}", name);

        let extent = iso9660::find_file_extent(track, name)?;
        return Some(BootExecutable {
            name: name.to_string(),
            extent,
        });
    }

    None
}
