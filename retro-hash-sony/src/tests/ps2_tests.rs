use super::*;

use retro_hash_core::{DiscReader, DiscTrack};

struct MemTrack {
    data: Vec<u8>,
}

impl DiscTrack for MemTrack {
    fn read_sector(&mut self, sector: u32, buffer: &mut [u8]) -> usize {
        let start = sector as usize * 2048;
        if start >= self.data.len() {
            return 0;
        }
        let end = (start + buffer.len().min(2048)).min(self.data.len());
        buffer[..end - start].copy_from_slice(&self.data[start..end]);
        end - start
    }

    fn to_track_sector(&self, absolute: u32) -> Option<u32> {
        Some(absolute)
    }
}

struct MemDisc {
    data: Vec<u8>,
}

impl DiscReader for MemDisc {
    fn open_track(&self, _path: &Path, _track: TrackSelector) -> Option<Box<dyn DiscTrack>> {
        Some(Box::new(MemTrack {
            data: self.data.clone(),
        }))
    }
}

const EXE_SECTOR: u32 = 20;
const EXE_EXTENT_SIZE: u32 = 6000;

fn write_dir_record(dir: &mut [u8], pos: usize, name: &str, extent: u32, size: u32) -> usize {
    let name_bytes = name.as_bytes();
    let record_len = 33 + name_bytes.len() + (name_bytes.len() % 2);
    dir[pos] = record_len as u8;
    dir[pos + 2..pos + 6].copy_from_slice(&extent.to_le_bytes());
    dir[pos + 10..pos + 14].copy_from_slice(&size.to_le_bytes());
    dir[pos + 32] = name_bytes.len() as u8;
    dir[pos + 33..pos + 33 + name_bytes.len()].copy_from_slice(name_bytes);
    pos + record_len
}

fn make_disc(system_cnf: &str, elf_claimed_size: u32) -> Vec<u8> {
    let mut data = vec![0u8; 26 * 2048];

    let pvd = &mut data[16 * 2048..];
    pvd[0] = 0x01;
    pvd[1..6].copy_from_slice(b"CD001");
    pvd[156] = 34;
    pvd[158..162].copy_from_slice(&18u32.to_le_bytes());

    {
        let dir = &mut data[18 * 2048..19 * 2048];
        let pos = write_dir_record(dir, 0, "SYSTEM.CNF;1", 19, system_cnf.len() as u32);
        write_dir_record(dir, pos, "SLUS_201.89;1", EXE_SECTOR, EXE_EXTENT_SIZE);
    }

    data[19 * 2048..19 * 2048 + system_cnf.len()].copy_from_slice(system_cnf.as_bytes());

    let exe_start = EXE_SECTOR as usize * 2048;
    for (i, byte) in data[exe_start..exe_start + EXE_EXTENT_SIZE as usize]
        .iter_mut()
        .enumerate()
    {
        *byte = (i % 253) as u8;
    }
    data[exe_start..exe_start + 4].copy_from_slice(&[0x7F, 0x45, 0x4C, 0x46]);
    // an ELF-header-ish size field the recipe must not consult
    data[exe_start + 28..exe_start + 32].copy_from_slice(&elf_claimed_size.to_le_bytes());

    data
}

/// Digest of the executable name plus exactly the filesystem-reported
/// extent, regardless of what the ELF header claims.
fn expected_hash(data: &[u8]) -> String {
    let exe_start = EXE_SECTOR as usize * 2048;
    let mut digest = Md5Digest::new();
    digest.append(b"SLUS_201.89");
    digest.append(&data[exe_start..exe_start + EXE_EXTENT_SIZE as usize]);
    digest.finalize()
}

#[test]
fn boot2_line_names_the_executable() {
    let data = make_disc("BOOT2 = cdrom0:\\SLUS_201.89;1\r\nVER = 1.00\r\n", 0);
    let expected = expected_hash(&data);

    let ctx = HashContext::new().with_disc_reader(MemDisc { data });
    assert_eq!(hash_ps2(&ctx, Path::new("game.cue")).unwrap(), expected);
}

#[test]
fn filesystem_size_is_hashed_even_when_elf_disagrees() {
    // claimed size is wildly larger than the extent; the extent wins
    let data = make_disc("BOOT2 = cdrom0:\\SLUS_201.89;1\r\n", 40 * 1024 * 1024);
    let expected = expected_hash(&data);

    let ctx = HashContext::new().with_disc_reader(MemDisc { data });
    assert_eq!(hash_ps2(&ctx, Path::new("game.cue")).unwrap(), expected);
}

#[test]
fn boot_line_of_the_wrong_generation_is_ignored() {
    // a PS1-style BOOT line must not satisfy the BOOT2 lookup
    let data = make_disc("BOOT = cdrom:\\SLUS_201.89;1\r\n", 0);

    let ctx = HashContext::new().with_disc_reader(MemDisc { data });
    let err = hash_ps2(&ctx, Path::new("game.cue")).unwrap_err();
    assert_eq!(err.to_string(), "Could not locate primary executable");
}

#[test]
fn missing_system_cnf_is_rejected() {
    let mut data = make_disc("BOOT2 = cdrom0:\\SLUS_201.89;1\r\n", 0);
    // wipe the directory so SYSTEM.CNF cannot be found
    for byte in &mut data[18 * 2048..19 * 2048] {
        *byte = 0;
    }

    let ctx = HashContext::new().with_disc_reader(MemDisc { data });
    let err = hash_ps2(&ctx, Path::new("game.cue")).unwrap_err();
    assert_eq!(err.to_string(), "Could not locate primary executable");
}
