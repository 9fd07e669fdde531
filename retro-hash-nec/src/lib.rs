//! NEC console recipes.
//!
//! PC Engine games ship both as HuCards (plain ROMs, sometimes with an
//! emulator header) and as CD-ROMs; PC-FX games are CD only, and a few PC-FX
//! discs still carry the PC Engine boot header.

pub mod pce;
pub mod pcfx;

pub use pce::{hash_pce_cd, hash_pce_rom};
pub use pcfx::hash_pcfx_cd;
