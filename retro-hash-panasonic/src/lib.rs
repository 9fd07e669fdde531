//! 3DO recipe.

pub mod threedo;

pub use threedo::hash_3do;
