//! Content-derived game fingerprinting.
//!
//! Computes a stable 128-bit fingerprint (32 lowercase hex characters) that
//! identifies a retro-console game regardless of the container it arrives
//! in: raw ROM, headered ROM, disc image, or a playlist referencing one.
//! Per-console recipes know which bytes of a dump are the game and which are
//! packaging, so an achievement service can map any user-held copy back to
//! the same canonical record.
//!
//! Entry points:
//! - [`hash_from_file`] / [`hash_from_buffer`] when the console is known
//! - [`HashIterator`] to try candidate consoles derived from the extension

// Re-export everything from retro-hash-core so embedders need one import.
pub use retro_hash_core::*;

pub mod arcade;
pub mod dispatch;
pub mod hasher;
pub mod iterator;
pub mod playlist;

pub use dispatch::{hash_from_buffer, hash_from_file};
pub use iterator::HashIterator;
