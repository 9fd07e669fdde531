use retro_hash_core::digest;

/// Hash an Atari 7800 ROM, skipping the 128-byte A78 header when present.
pub fn hash_7800(buffer: &[u8]) -> String {
    let body = if buffer.len() >= 128 && &buffer[1..10] == b"ATARI7800" {
        log::debug!("Ignoring 7800 header");
        &buffer[128..]
    } else {
        buffer
    };

    digest::hash_buffer(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_stripped() {
        let rom = vec![0xA5u8; 16 * 1024];

        let mut headered = vec![0u8; 128];
        headered[1..10].copy_from_slice(b"ATARI7800");
        headered.extend_from_slice(&rom);

        assert_eq!(hash_7800(&headered), digest::hash_buffer(&rom));
        assert_eq!(hash_7800(&rom), digest::hash_buffer(&rom));
    }

    #[test]
    fn short_buffer_with_magic_is_hashed_whole() {
        let mut buffer = vec![0u8; 10];
        buffer[1..10].copy_from_slice(b"ATARI7800");
        assert_eq!(hash_7800(&buffer), digest::hash_buffer(&buffer));
    }
}
