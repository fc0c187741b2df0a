//! Public API traits and types for the fileseal library
//!
//! This crate provides the public API surface for the fileseal ecosystem:
//! trait definitions, the shared error taxonomy, validation helpers, and
//! the secret byte containers used for key material.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::{BlockCipher, CipherAlgorithm, KeyWrap};
pub use types::SecretBytes;
