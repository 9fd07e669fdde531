use super::*;

use std::collections::HashMap;
use std::io::Cursor;

use retro_hash_core::{FileReader, ReadSeek};

struct MemFs(HashMap<String, Vec<u8>>);

impl MemFs {
    fn single(path: &str, data: &str) -> Self {
        Self(HashMap::from([(path.to_string(), data.as_bytes().to_vec())]))
    }
}

impl FileReader for MemFs {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn ReadSeek>> {
        match self.0.get(path.to_string_lossy().as_ref()) {
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None => Err(std::io::Error::from(std::io::ErrorKind::NotFound)),
        }
    }
}

#[test]
fn relative_entry_is_resolved_against_playlist_directory() {
    let ctx = HashContext::new()
        .with_file_reader(MemFs::single("/games/psx/game.m3u", "game.cue\n"));
    let entry = first_playlist_entry(&ctx, Path::new("/games/psx/game.m3u")).unwrap();
    assert_eq!(entry, PathBuf::from("/games/psx/game.cue"));
}

#[test]
fn absolute_entry_is_returned_verbatim() {
    let ctx = HashContext::new()
        .with_file_reader(MemFs::single("/games/game.m3u", "/discs/game.chd\n"));
    let entry = first_playlist_entry(&ctx, Path::new("/games/game.m3u")).unwrap();
    assert_eq!(entry, PathBuf::from("/discs/game.chd"));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let text = "# multi-disc set\r\n\r\n   \r\ndisc1.cue\r\ndisc2.cue\r\n";
    let ctx = HashContext::new().with_file_reader(MemFs::single("/g/set.m3u", text));
    let entry = first_playlist_entry(&ctx, Path::new("/g/set.m3u")).unwrap();
    assert_eq!(entry, PathBuf::from("/g/disc1.cue"));
}

#[test]
fn trailing_whitespace_is_stripped() {
    let ctx = HashContext::new()
        .with_file_reader(MemFs::single("/g/game.m3u", "game.cue   \r\n"));
    let entry = first_playlist_entry(&ctx, Path::new("/g/game.m3u")).unwrap();
    assert_eq!(entry, PathBuf::from("/g/game.cue"));
}

#[test]
fn playlist_with_only_comments_is_empty() {
    let ctx = HashContext::new()
        .with_file_reader(MemFs::single("/g/game.m3u", "# nothing\n#at all\n\n"));
    let err = first_playlist_entry(&ctx, Path::new("/g/game.m3u")).unwrap_err();
    assert!(matches!(err, HashError::EmptyPlaylist));
}

#[test]
fn missing_playlist_reports_open_failure() {
    let ctx = HashContext::new().with_file_reader(MemFs(HashMap::new()));
    let err = first_playlist_entry(&ctx, Path::new("/g/game.m3u")).unwrap_err();
    assert_eq!(err.to_string(), "Could not open playlist");
}
