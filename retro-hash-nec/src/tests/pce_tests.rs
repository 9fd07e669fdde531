use super::*;

use retro_hash_core::DiscReader;

/// In-memory single track: flat 2048-byte sectors, identity translation.
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

/// Disc reader that serves one image for every selector.
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

/// 22-byte space-padded title field.
fn title_field() -> [u8; 22] {
    let mut title = [b' '; 22];
    title[..9].copy_from_slice(b"SOME GAME");
    title
}

/// Standard disc: boot block in sector 1, program data at sector 4.
fn make_pce_image() -> Vec<u8> {
    let mut data = vec![0u8; 8 * 2048];

    let boot = &mut data[2048..2048 + 128];
    boot[0..3].copy_from_slice(&[0, 0, 4]); // program starts at sector 4
    boot[3] = 2; // two sectors
    boot[32..55].copy_from_slice(b"PC Engine CD-ROM SYSTEM");
    boot[106..128].copy_from_slice(&title_field());

    for byte in &mut data[4 * 2048..6 * 2048] {
        *byte = 0xCD;
    }

    data
}

#[test]
fn rom_header_is_stripped() {
    let rom = vec![0x7Eu8; 0x20000];

    let mut headered = vec![0u8; 512];
    headered.extend_from_slice(&rom);

    assert_eq!(hash_pce_rom(&headered), digest::hash_buffer(&rom));
    assert_eq!(hash_pce_rom(&rom), digest::hash_buffer(&rom));
}

#[test]
fn boot_block_disc_hashes_title_and_program_sectors() {
    let data = make_pce_image();

    let mut expected = Md5Digest::new();
    expected.append(&title_field());
    expected.append(&data[4 * 2048..6 * 2048]);
    let expected = expected.finalize();

    let mut track = MemTrack { data };
    assert_eq!(hash_pce_track(&mut track).unwrap(), expected);
}

#[test]
fn first_data_track_wrapper_matches_track_recipe() {
    let data = make_pce_image();
    let mut track = MemTrack { data: data.clone() };
    let expected = hash_pce_track(&mut track).unwrap();

    let ctx = HashContext::new().with_disc_reader(MemDisc { data });
    assert_eq!(hash_pce_cd(&ctx, Path::new("game.cue")).unwrap(), expected);
}

#[test]
fn game_express_disc_falls_back_to_boot_bin() {
    // sectors 0-15 blank, PVD at 16, root directory at 18, BOOT.BIN at 20
    let mut data = vec![0u8; 21 * 2048 + 100];

    let pvd = &mut data[16 * 2048..];
    pvd[0] = 0x01;
    pvd[1..6].copy_from_slice(b"CD001");
    pvd[156] = 34;
    pvd[158..162].copy_from_slice(&18u32.to_le_bytes());

    let boot_size = 2048u32 + 100;
    let record_len = 33 + 10 + 1;
    let dir = &mut data[18 * 2048..];
    dir[0] = record_len as u8;
    dir[2..6].copy_from_slice(&20u32.to_le_bytes());
    dir[10..14].copy_from_slice(&boot_size.to_le_bytes());
    dir[32] = 10;
    dir[33..43].copy_from_slice(b"BOOT.BIN;1");

    for byte in &mut data[20 * 2048..20 * 2048 + boot_size as usize] {
        *byte = 0xB0;
    }

    let expected = digest::hash_buffer(&vec![0xB0u8; boot_size as usize]);

    let mut track = MemTrack { data };
    assert_eq!(hash_pce_track(&mut track).unwrap(), expected);
}

#[test]
fn unrecognized_disc_is_rejected() {
    let mut track = MemTrack {
        data: vec![0u8; 4 * 2048],
    };
    let err = hash_pce_track(&mut track).unwrap_err();
    assert_eq!(err.to_string(), "Not a PC Engine CD");
}
