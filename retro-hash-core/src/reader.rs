use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Hook for opening files on behalf of the hashing recipes.
///
/// The default implementation opens plain files with 64-bit-safe std I/O.
/// Embedders that keep ROMs inside archives or on virtual filesystems
/// implement this trait and hand back a reader over the uncompressed
/// content. Seek, tell, read, and close are all expressed through the
/// returned handle (`Seek`, `Read`, `Drop`), so any subset can be overridden
/// by wrapping a handle.
pub trait FileReader: Send + Sync {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn ReadSeek>>;
}

/// Default file reader backed by `std::fs::File`.
#[derive(Debug, Default)]
pub struct StdFileReader;

impl FileReader for StdFileReader {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn ReadSeek>> {
        Ok(Box::new(File::open(path)?))
    }
}

/// Read into `buf` until it is full or the reader is exhausted. Returns the
/// number of bytes read.
pub fn read_fill(reader: &mut dyn ReadSeek, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}
