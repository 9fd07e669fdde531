//! Atari console recipes.
//!
//! Both the 7800 and the Lynx are cartridge systems whose dumps sometimes
//! carry an emulator header in front of the ROM data; the fingerprint covers
//! only the ROM so headered and headerless dumps identify the same game.

pub mod a7800;
pub mod lynx;

pub use a7800::hash_7800;
pub use lynx::hash_lynx;
