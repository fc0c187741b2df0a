//! Cryptographic primitives for the fileseal library
//!
//! This crate implements the two independent engines the hybrid layer
//! composes:
//!
//! - [`block`]: the AES block cipher (all three key sizes), the
//!   per-block-independent mode of operation, and PKCS#7 padding.
//! - [`rsa`]: probable-prime generation, keypair generation, and the
//!   modular-exponentiation transform used exclusively for key wrapping.
//!
//! These implementations favor byte-for-byte compatibility with the system
//! they were extracted from over side-channel resistance; see the module
//! docs for the acknowledged weaknesses.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
pub mod rsa;

// Re-exports
pub use block::aes::{Aes128, Aes192, Aes256, AesKey, KeySize};
pub use block::modes::Ecb;
pub use block::padding::pkcs7;
pub use rsa::{Rsa, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
