//! Block cipher, mode of operation, and padding
//!
//! Data flows pad -> per-block transform on encrypt and the exact mirror
//! on decrypt. Each 16-byte block is processed independently with the same
//! expanded key schedule.

pub mod aes;
pub mod modes;
pub mod padding;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};
pub use modes::Ecb;
