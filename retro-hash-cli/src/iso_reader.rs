//! Minimal disc reader for uncompressed 2048-byte-sector ISO images.
//!
//! Real CUE/CHD/GDI extraction is an embedder concern; this reader covers
//! the plain single-track case so `.iso` dumps hash without one.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use retro_hash_lib::{DiscReader, DiscTrack, TrackSelector};

const SECTOR_SIZE: u64 = 2048;

pub struct IsoFileReader;

struct IsoTrack {
    file: File,
    sectors: u32,
}

impl DiscReader for IsoFileReader {
    fn open_track(&self, path: &Path, _track: TrackSelector) -> Option<Box<dyn DiscTrack>> {
        // every selector resolves to the image's single data track
        let file = File::open(path).ok()?;
        let len = file.metadata().ok()?.len();
        Some(Box::new(IsoTrack {
            file,
            sectors: (len / SECTOR_SIZE) as u32,
        }))
    }
}

impl DiscTrack for IsoTrack {
    fn read_sector(&mut self, sector: u32, buffer: &mut [u8]) -> usize {
        let offset = u64::from(sector) * SECTOR_SIZE;
        if self.file.seek(SeekFrom::Start(offset)).is_err() {
            return 0;
        }

        let want = buffer.len().min(SECTOR_SIZE as usize);
        let mut total = 0;
        while total < want {
            match self.file.read(&mut buffer[total..want]) {
                Ok(0) | Err(_) => break,
                Ok(n) => total += n,
            }
        }
        total
    }

    fn to_track_sector(&self, absolute: u32) -> Option<u32> {
        (absolute < self.sectors).then_some(absolute)
    }
}
