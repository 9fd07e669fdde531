//! Nintendo console recipes.

pub mod ds;
pub mod nes;
pub mod snes;

pub use ds::hash_nintendo_ds;
pub use nes::hash_nes;
pub use snes::hash_snes;
