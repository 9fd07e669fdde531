//! Candidate-console iterator.
//!
//! Many extensions are ambiguous (`bin`, `cue`, `dsk`, ...), so hashing an
//! arbitrary file means building an ordered candidate list from the
//! extension (and sometimes the file size) and trying recipes until one
//! produces a fingerprint.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use retro_hash_core::{HashContext, HashError, Platform, path};

use crate::{dispatch, playlist};

pub struct HashIterator<'a> {
    candidates: Vec<Platform>,
    index: usize,
    /// Preloaded file contents, when the embedder already has them. A
    /// resolved playlist discards the buffer, since it held the playlist
    /// text rather than the image.
    buffer: Option<&'a [u8]>,
    /// Owned so that a path resolved out of a playlist outlives the
    /// iteration that needs to reopen it.
    file_path: PathBuf,
}

impl<'a> HashIterator<'a> {
    /// Build the ordered candidate list for `file_path`.
    pub fn new(ctx: &HashContext, file_path: &Path, buffer: Option<&'a [u8]>) -> Self {
        let mut iterator = Self {
            candidates: Vec::new(),
            index: 0,
            buffer,
            file_path: file_path.to_path_buf(),
        };
        iterator.classify(ctx);
        iterator
    }

    /// Try the remaining candidates in order until one produces a
    /// fingerprint. Recipe failures are logged and swallowed; exhaustion is
    /// the only error surfaced.
    pub fn iterate(&mut self, ctx: &HashContext) -> Result<String, HashError> {
        while let Some(&console) = self.candidates.get(self.index) {
            self.index += 1;
            log::debug!("Trying console {}", console.display_name());

            let result = match self.buffer {
                Some(buffer) => dispatch::hash_from_buffer(console, buffer),
                None => dispatch::hash_from_file(ctx, console, &self.file_path),
            };
            match result {
                Ok(hash) => return Ok(hash),
                Err(err) => log::debug!("{} hash failed: {}", console.short_name(), err),
            }
        }

        Err(HashError::Exhausted)
    }

    /// Candidate consoles in trial order.
    pub fn candidates(&self) -> &[Platform] {
        &self.candidates
    }

    /// The path candidates are hashed from (post playlist resolution).
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn append(&mut self, console: Platform) {
        if !self.candidates.contains(&console) {
            self.candidates.push(console);
        }
    }

    fn classify(&mut self, ctx: &HashContext) {
        // the loop only repeats for extensions that redirect to another
        // file, like m3u
        loop {
            let name = self.file_path.to_string_lossy().into_owned();
            let ext = path::extension(&name).to_ascii_lowercase();

            match ext.as_str() {
                "2d" => self.append(Platform::SharpX1),

                // archive contents are not inspected; arcade sets are
                // identified by name
                "7z" | "zip" => self.append(Platform::Arcade),

                "a78" => self.append(Platform::Atari7800),

                "bin" => self.classify_bin(ctx),
                "bs" | "fig" | "sfc" | "smc" | "swc" => self.append(Platform::Snes),

                "cas" | "mx1" | "mx2" | "ri" => self.append(Platform::Msx),

                "cue" => {
                    self.append(Platform::PlayStation);
                    self.append(Platform::PlayStation2);
                    self.append(Platform::PcEngine);
                    self.append(Platform::ThreeDo);
                    self.append(Platform::PcFx);
                    // the Sega CD recipe also recognizes Saturn discs
                    self.append(Platform::SegaCd);
                }
                "chd" => {
                    self.append(Platform::PlayStation);
                    self.append(Platform::PlayStation2);
                    self.append(Platform::Dreamcast);
                    self.append(Platform::PcEngine);
                    self.append(Platform::ThreeDo);
                    self.append(Platform::PcFx);
                    self.append(Platform::SegaCd);
                }

                "col" => self.append(Platform::Colecovision),

                "d88" => {
                    self.append(Platform::Pc8800);
                    self.append(Platform::SharpX1);
                }
                "dsk" => self.classify_dsk(ctx),

                "fd" | "sap" => self.append(Platform::ThomsonTo8),
                "fds" => self.append(Platform::Nes),

                "gb" => self.append(Platform::GameBoy),
                "gba" => self.append(Platform::Gba),
                "gbc" => self.append(Platform::GameBoyColor),
                "gdi" => self.append(Platform::Dreamcast),
                "gg" => self.append(Platform::GameGear),

                "iso" => {
                    self.append(Platform::PlayStation2);
                    self.append(Platform::ThreeDo);
                    self.append(Platform::SegaCd);
                }

                "jag" => self.append(Platform::Jaguar),

                "k7" | "m5" | "m7" => self.append(Platform::ThomsonTo8),

                "lnx" => self.append(Platform::Lynx),

                "m3u" => match playlist::first_playlist_entry(ctx, &self.file_path) {
                    Ok(resolved) => {
                        // the buffer, if any, held the playlist text
                        self.buffer = None;
                        self.file_path = resolved;
                        continue;
                    }
                    Err(err) => {
                        log::debug!("Could not resolve playlist: {}", err);
                        return;
                    }
                },
                "md" => self.append(Platform::MegaDrive),
                "min" => self.append(Platform::PokemonMini),

                "n64" | "ndd" => self.append(Platform::N64),
                "nds" => self.append(Platform::Ds),
                "nes" => self.append(Platform::Nes),
                "ngc" => self.append(Platform::NeoGeoPocket),

                "pce" | "sgx" => self.append(Platform::PcEngine),

                "rom" => {
                    self.append(Platform::Msx);
                    self.append(Platform::ThomsonTo8);
                }

                "sg" => self.append(Platform::Sg1000),
                "sv" => self.append(Platform::Supervision),

                "tap" => self.append(Platform::Oric),
                "tic" => self.append(Platform::Tic80),

                "vb" => self.append(Platform::VirtualBoy),

                "woz" => self.append(Platform::AppleII),
                "wsc" => self.append(Platform::Wonderswan),

                _ => {}
            }

            log::debug!(
                "Found {} potential consoles for {} file extension",
                self.candidates.len(),
                ext
            );
            break;
        }

        // unmatched extensions get a plain whole-file hash
        if self.candidates.is_empty() {
            self.append(Platform::GameBoy);
        }
    }

    /// `bin` is raw data: a large file with no preloaded buffer may be a CD
    /// track, otherwise it is treated as a cartridge dump.
    fn classify_bin(&mut self, ctx: &HashContext) {
        if self.buffer.is_none() {
            let size = self.probe_file_size(ctx);
            if size > 32 * 1024 * 1024 {
                self.append(Platform::ThreeDo);
                self.append(Platform::PlayStation);
                self.append(Platform::PlayStation2);
                self.append(Platform::SegaCd);
                // fallback that hashes the whole file
                self.append(Platform::MegaDrive);
                return;
            }
        }

        // bin also covers 32X, Atari 2600, and Supervision carts; they all
        // share the whole-file recipe, so one candidate stands in for all
        self.append(Platform::MegaDrive);
    }

    /// `dsk` images are sized by their physical format, which picks the
    /// primary guess; both systems stay on the list as fallbacks.
    fn classify_dsk(&mut self, ctx: &HashContext) {
        let size = match self.buffer {
            Some(buffer) => buffer.len() as u64,
            None => self.probe_file_size(ctx),
        };

        match size {
            // FAT-12 layouts: 360KB, 720KB, 180KB
            368_640 | 737_280 | 184_320 => self.append(Platform::Msx),
            // Apple II 16-sector and 13-sector track layouts
            143_360 | 116_480 => self.append(Platform::AppleII),
            _ => {}
        }

        self.append(Platform::Msx);
        self.append(Platform::AppleII);
    }

    fn probe_file_size(&self, ctx: &HashContext) -> u64 {
        let Ok(mut file) = ctx.open_file(&self.file_path) else {
            return 0;
        };
        file.seek(SeekFrom::End(0)).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "tests/iterator_tests.rs"]
mod tests;
