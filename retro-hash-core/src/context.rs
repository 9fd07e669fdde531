//! Hook context threaded through all hashing entry points.

use std::path::Path;

use crate::disc::{DiscReader, DiscTrack, TrackSelector};
use crate::error::HashError;
use crate::path;
use crate::reader::{FileReader, ReadSeek, StdFileReader};

/// Holds the file and disc hooks a hashing run operates through.
///
/// A context is built once and shared for the life of the process (the hook
/// traits are `Send + Sync`, so one context can serve several threads). File
/// access defaults to std I/O; disc access has no default and must be
/// installed before optical-disc formats can be hashed.
pub struct HashContext {
    file_reader: Box<dyn FileReader>,
    disc_reader: Option<Box<dyn DiscReader>>,
}

impl Default for HashContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HashContext {
    /// Create a context with the default std file reader and no disc reader.
    pub fn new() -> Self {
        Self {
            file_reader: Box::new(StdFileReader),
            disc_reader: None,
        }
    }

    /// Replace the default file reader with a custom hook.
    pub fn with_file_reader(mut self, reader: impl FileReader + 'static) -> Self {
        self.file_reader = Box::new(reader);
        self
    }

    /// Install a disc reader. Required by the optical-disc recipes.
    pub fn with_disc_reader(mut self, reader: impl DiscReader + 'static) -> Self {
        self.disc_reader = Some(Box::new(reader));
        self
    }

    pub fn has_disc_reader(&self) -> bool {
        self.disc_reader.is_some()
    }

    /// Open a file through the installed hook.
    pub fn open_file(&self, path: &Path) -> Result<Box<dyn ReadSeek>, HashError> {
        match self.file_reader.open(path) {
            Ok(handle) => {
                log::debug!(
                    "Opened {}",
                    path::filename(path.to_string_lossy().as_ref())
                );
                Ok(handle)
            }
            Err(_) => Err(HashError::cannot_open("file")),
        }
    }

    /// Open a disc track through the installed hook.
    pub fn open_track(
        &self,
        path: &Path,
        track: TrackSelector,
    ) -> Result<Box<dyn DiscTrack>, HashError> {
        let reader = self
            .disc_reader
            .as_deref()
            .ok_or(HashError::NoDiscReader("open_track"))?;
        reader
            .open_track(path, track)
            .ok_or_else(|| HashError::cannot_open("track"))
    }
}
