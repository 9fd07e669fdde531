//! MD5 digest helpers.
//!
//! MD5 is not used for security here. It is a cheap, deterministic 128-bit
//! hash whose lowercase-hex rendering is the canonical game identifier in
//! the achievement database.

use crate::MAX_BUFFER_SIZE;
use crate::disc::DiscTrack;
use crate::error::HashError;

/// Streaming MD5 accumulator with a terminal render-to-hex step.
pub struct Md5Digest {
    ctx: md5::Context,
}

impl Default for Md5Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5Digest {
    pub fn new() -> Self {
        Self {
            ctx: md5::Context::new(),
        }
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.ctx.consume(bytes);
    }

    /// Finish the digest and render it as exactly 32 lowercase hex digits.
    pub fn finalize(self) -> String {
        let hash = format!("{:x}", self.ctx.compute());
        log::debug!("Generated hash {}", hash);
        hash
    }
}

/// Hash a fully loaded buffer, truncating input at [`MAX_BUFFER_SIZE`].
pub fn hash_buffer(buffer: &[u8]) -> String {
    let len = buffer.len().min(MAX_BUFFER_SIZE as usize);
    if len < buffer.len() {
        log::debug!("Hashing first {} bytes of {} byte buffer", len, buffer.len());
    } else {
        log::debug!("Hashing {} byte buffer", len);
    }

    let mut digest = Md5Digest::new();
    digest.append(&buffer[..len]);
    digest.finalize()
}

/// Stream exactly `size` bytes of a file stored on a disc track into
/// `digest`, starting at `sector` and reading the final sector partially.
///
/// Fails when the first sector cannot be read in full; later short reads end
/// the stream the way a truncated dump would.
pub fn hash_cd_file(
    digest: &mut Md5Digest,
    track: &mut dyn DiscTrack,
    sector: u32,
    size: u32,
    description: &'static str,
) -> Result<(), HashError> {
    let mut buffer = [0u8; 2048];

    let mut num_read = track.read_sector(sector, &mut buffer);
    if num_read < buffer.len() {
        return Err(HashError::cannot_read(description));
    }

    let mut size = size.min(MAX_BUFFER_SIZE as u32);
    log::debug!("Hashing {} contents ({} bytes)", description, size);

    let mut sector = sector;
    loop {
        let take = (size as usize).min(num_read);
        digest.append(&buffer[..take]);

        size -= take as u32;
        if size == 0 {
            break;
        }

        sector += 1;
        let want = (size as usize).min(buffer.len());
        num_read = track.read_sector(sector, &mut buffer[..want]);
        if num_read == 0 {
            break;
        }
    }

    Ok(())
}
