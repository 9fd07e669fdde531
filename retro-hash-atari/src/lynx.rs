use retro_hash_core::digest;

/// Hash an Atari Lynx ROM, skipping the 64-byte LNX header when present.
pub fn hash_lynx(buffer: &[u8]) -> String {
    let body = if buffer.len() >= 64 && buffer.starts_with(b"LYNX\0") {
        log::debug!("Ignoring LYNX header");
        &buffer[64..]
    } else {
        buffer
    };

    digest::hash_buffer(body)
}
