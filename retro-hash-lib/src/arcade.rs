//! Arcade recipe.
//!
//! Arcade cores are stringent about ROM set contents and load sets by their
//! canonical file name, so the fingerprint is derived from the path rather
//! than the bytes: the filename without its extension, optionally prefixed
//! by the parent folder when that folder selects a console subsystem.

use std::path::Path;

use retro_hash_core::{digest, path};

/// Folder names arcade cores recognize as console subsystems. Matched
/// case-sensitively, the way the cores do.
const SUBSYSTEM_FOLDERS: &[&str] = &[
    "nes", "fds", "sms", "msx", "ngp", "pce", "sgx", "tg16", "coleco", "sg1000", "gamegear",
    "megadriv", "spectrum",
];

pub fn hash_arcade(file_path: &Path) -> String {
    let full = file_path.to_string_lossy();
    let filename = path::filename(&full);
    let stem = match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    };

    let parent = full[..full.len() - filename.len()].trim_end_matches(['/', '\\']);
    let folder = path::filename(parent);
    if SUBSYSTEM_FOLDERS.contains(&folder) {
        return digest::hash_buffer(format!("{}_{}", folder, stem).as_bytes());
    }

    digest::hash_buffer(stem.as_bytes())
}
