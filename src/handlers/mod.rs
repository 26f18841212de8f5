// handlers/mod.rs - HTTP handlers
//
// Only the public tier exists: login needs no prior authentication.
pub mod public;

pub use public::*;
