use retro_hash_core::digest;

/// Hash a SNES ROM, skipping a 512-byte copier header when present.
///
/// ROM data comes in 8 KB banks; a 512-byte remainder marks a header
/// prepended by historical copier hardware.
pub fn hash_snes(buffer: &[u8]) -> String {
    let body = if buffer.len() % 0x2000 == 512 {
        log::debug!("Ignoring SNES header");
        &buffer[512..]
    } else {
        buffer
    };

    digest::hash_buffer(body)
}
