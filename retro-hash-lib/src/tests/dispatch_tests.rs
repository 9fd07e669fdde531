use super::*;

use std::collections::HashMap;
use std::io::Cursor;

use retro_hash_core::{FileReader, ReadSeek};

struct MemFs(HashMap<String, Vec<u8>>);

impl FileReader for MemFs {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn ReadSeek>> {
        match self.0.get(path.to_string_lossy().as_ref()) {
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None => Err(std::io::Error::from(std::io::ErrorKind::NotFound)),
        }
    }
}

#[test]
fn generic_consoles_hash_the_whole_buffer() {
    let data = vec![0x11u8; 4096];
    let expected = digest::hash_buffer(&data);

    for console in [
        Platform::MegaDrive,
        Platform::GameBoy,
        Platform::N64,
        Platform::Msx,
        Platform::Tic80,
    ] {
        assert_eq!(hash_from_buffer(console, &data).unwrap(), expected);
    }
}

#[test]
fn headered_nes_buffer_matches_bare_rom_hash() {
    let rom = vec![0u8; 32 * 1024];
    let mut headered = Vec::with_capacity(16 + rom.len());
    headered.extend_from_slice(b"NES\x1a");
    headered.extend_from_slice(&[0u8; 12]);
    headered.extend_from_slice(&rom);

    assert_eq!(
        hash_from_buffer(Platform::Nes, &headered).unwrap(),
        digest::hash_buffer(&rom)
    );
}

#[test]
fn snes_copier_header_is_stripped() {
    let rom = vec![0x42u8; 8 * 1024];
    let mut headered = vec![0u8; 512];
    headered.extend_from_slice(&rom);

    assert_eq!(
        hash_from_buffer(Platform::Snes, &headered).unwrap(),
        digest::hash_buffer(&rom)
    );
}

#[test]
fn path_only_consoles_cannot_hash_buffers() {
    for console in [Platform::Arcade, Platform::Ds, Platform::PlayStation] {
        let err = hash_from_buffer(console, &[0u8; 16]).unwrap_err();
        assert!(matches!(err, HashError::Unsupported { kind: "buffer", .. }));
    }
}

#[test]
fn consoles_without_a_file_recipe_are_unsupported() {
    let ctx = HashContext::new();
    for console in [Platform::ThomsonTo8, Platform::SharpX1] {
        let err = hash_from_file(&ctx, console, Path::new("game.rom")).unwrap_err();
        assert!(matches!(err, HashError::Unsupported { kind: "file", .. }));
    }
}

#[test]
fn msx_playlist_is_transparent() {
    let rom = vec![0x77u8; 16 * 1024];
    let expected = digest::hash_buffer(&rom);

    let ctx = HashContext::new().with_file_reader(MemFs(HashMap::from([
        (
            "/games/msx/game.m3u".to_string(),
            b"# disc set\ngame.rom\n".to_vec(),
        ),
        ("/games/msx/game.rom".to_string(), rom),
    ])));

    assert_eq!(
        hash_from_file(&ctx, Platform::Msx, Path::new("/games/msx/game.m3u")).unwrap(),
        expected
    );
    assert_eq!(
        hash_from_file(&ctx, Platform::Msx, Path::new("/games/msx/game.rom")).unwrap(),
        expected
    );
}

#[test]
fn pce_extension_picks_rom_or_disc_recipe() {
    // a HuCard image routes to the buffered ROM recipe
    let rom = vec![0x7Eu8; 0x20000];
    let ctx = HashContext::new().with_file_reader(MemFs(HashMap::from([(
        "game.pce".to_string(),
        rom.clone(),
    )])));
    assert_eq!(
        hash_from_file(&ctx, Platform::PcEngine, Path::new("game.pce")).unwrap(),
        digest::hash_buffer(&rom)
    );

    // a cue routes to the disc recipe, which needs a disc reader
    let err = hash_from_file(&ctx, Platform::PcEngine, Path::new("game.cue")).unwrap_err();
    assert!(matches!(err, HashError::NoDiscReader("open_track")));
}

#[test]
fn disc_recipes_without_disc_reader_fail_with_configuration_error() {
    let ctx = HashContext::new();
    for (console, file) in [
        (Platform::ThreeDo, "game.cue"),
        (Platform::PlayStation, "game.cue"),
        (Platform::PlayStation2, "game.iso"),
        (Platform::Dreamcast, "game.gdi"),
        (Platform::SegaCd, "game.cue"),
        (Platform::Saturn, "game.cue"),
        (Platform::PcFx, "game.cue"),
    ] {
        let err = hash_from_file(&ctx, console, Path::new(file)).unwrap_err();
        assert!(
            matches!(err, HashError::NoDiscReader("open_track")),
            "{:?} should need a disc reader",
            console
        );
    }
}

#[test]
fn arcade_routes_by_path() {
    let ctx = HashContext::new();
    assert_eq!(
        hash_from_file(&ctx, Platform::Arcade, Path::new("/roms/nes/SomeGame.zip")).unwrap(),
        digest::hash_buffer(b"nes_SomeGame")
    );
}
