//! Console-to-recipe dispatch.

use std::path::Path;

use retro_hash_core::{HashContext, HashError, Platform, digest, path};

use crate::{arcade, hasher, playlist};

/// Hash preloaded file contents as the given console.
///
/// Consoles whose recipes need the path (disc formats, Nintendo DS, arcade)
/// cannot hash from a buffer and report themselves unsupported here.
pub fn hash_from_buffer(console: Platform, buffer: &[u8]) -> Result<String, HashError> {
    match console {
        Platform::AppleII
        | Platform::Atari2600
        | Platform::Colecovision
        | Platform::GameBoy
        | Platform::GameBoyColor
        | Platform::Gba
        | Platform::GameGear
        | Platform::Intellivision
        | Platform::Jaguar
        | Platform::MagnavoxOdyssey2
        | Platform::MasterSystem
        | Platform::MegaDrive
        | Platform::Msx
        | Platform::N64
        | Platform::NeoGeoPocket
        | Platform::Oric
        | Platform::Pc8800
        | Platform::PokemonMini
        | Platform::Sega32x
        | Platform::Sg1000
        | Platform::Supervision
        | Platform::Tic80
        | Platform::Vectrex
        | Platform::VirtualBoy
        | Platform::Wonderswan => Ok(digest::hash_buffer(buffer)),

        Platform::Atari7800 => Ok(retro_hash_atari::hash_7800(buffer)),
        Platform::Lynx => Ok(retro_hash_atari::hash_lynx(buffer)),
        Platform::Nes => Ok(retro_hash_nintendo::hash_nes(buffer)),
        // HuCard images only; PC Engine CDs go through hash_from_file
        Platform::PcEngine => Ok(retro_hash_nec::hash_pce_rom(buffer)),
        Platform::Snes => Ok(retro_hash_nintendo::hash_snes(buffer)),

        _ => Err(HashError::Unsupported {
            console,
            kind: "buffer",
        }),
    }
}

/// Hash a file as the given console, choosing the recipe by console class
/// and, for a few consoles, by extension.
pub fn hash_from_file(
    ctx: &HashContext,
    console: Platform,
    file_path: &Path,
) -> Result<String, HashError> {
    let name = file_path.to_string_lossy();

    match console {
        Platform::AppleII
        | Platform::Atari2600
        | Platform::Colecovision
        | Platform::GameBoy
        | Platform::GameBoyColor
        | Platform::Gba
        | Platform::GameGear
        | Platform::Intellivision
        | Platform::Jaguar
        | Platform::MagnavoxOdyssey2
        | Platform::MasterSystem
        | Platform::MegaDrive
        | Platform::N64
        | Platform::NeoGeoPocket
        | Platform::Oric
        | Platform::PokemonMini
        | Platform::Sega32x
        | Platform::Sg1000
        | Platform::Supervision
        | Platform::Tic80
        | Platform::Vectrex
        | Platform::VirtualBoy
        | Platform::Wonderswan => hasher::hash_whole_file(ctx, file_path),

        Platform::Msx | Platform::Pc8800 => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            hasher::hash_whole_file(ctx, file_path)
        }

        Platform::Atari7800 | Platform::Lynx | Platform::Nes | Platform::Snes => {
            hasher::hash_buffered_file(ctx, console, file_path)
        }

        Platform::ThreeDo => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            retro_hash_panasonic::hash_3do(ctx, file_path)
        }

        Platform::Arcade => Ok(arcade::hash_arcade(file_path)),

        Platform::Ds => retro_hash_nintendo::hash_nintendo_ds(ctx, file_path),

        Platform::PcEngine => {
            if path::compare_extension(&name, "cue") || path::compare_extension(&name, "chd") {
                return retro_hash_nec::hash_pce_cd(ctx, file_path);
            }
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            hasher::hash_buffered_file(ctx, console, file_path)
        }

        Platform::PcFx => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            retro_hash_nec::hash_pcfx_cd(ctx, file_path)
        }

        Platform::PlayStation => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            retro_hash_sony::hash_psx(ctx, file_path)
        }

        Platform::PlayStation2 => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            retro_hash_sony::hash_ps2(ctx, file_path)
        }

        Platform::Dreamcast => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            retro_hash_sega::hash_dreamcast(ctx, file_path)
        }

        Platform::SegaCd | Platform::Saturn => {
            if path::compare_extension(&name, "m3u") {
                return hash_from_playlist(ctx, console, file_path);
            }
            retro_hash_sega::hash_sega_cd(ctx, file_path)
        }

        _ => Err(HashError::Unsupported {
            console,
            kind: "file",
        }),
    }
}

/// Resolve the playlist's first entry and hash it as the same console.
fn hash_from_playlist(
    ctx: &HashContext,
    console: Platform,
    m3u_path: &Path,
) -> Result<String, HashError> {
    log::debug!(
        "Processing playlist: {}",
        path::filename(&m3u_path.to_string_lossy())
    );

    let disc_path = playlist::first_playlist_entry(ctx, m3u_path)?;
    hash_from_file(ctx, console, &disc_path)
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
