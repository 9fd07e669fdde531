use retro_hash_core::digest;

/// Hash an NES or Famicom Disk System ROM, skipping the 16-byte iNES/FDS
/// container header when present.
pub fn hash_nes(buffer: &[u8]) -> String {
    let body = if buffer.len() >= 16 && buffer.starts_with(b"NES\x1a") {
        log::debug!("Ignoring NES header");
        &buffer[16..]
    } else if buffer.len() >= 16 && buffer.starts_with(b"FDS\x1a") {
        log::debug!("Ignoring FDS header");
        &buffer[16..]
    } else {
        buffer
    };

    digest::hash_buffer(body)
}
