//! Sony console recipes.
//!
//! PlayStation and PlayStation 2 discs name their primary executable in a
//! SYSTEM.CNF text file; the digest covers the executable name and its
//! contents. A handful of games share one engine binary and differ only in
//! data files, but they carry unique serial-numbered boot names, which is
//! why the name participates in the hash.

mod system_cnf;

pub mod ps1;
pub mod ps2;

pub use ps1::hash_psx;
pub use ps2::hash_ps2;
