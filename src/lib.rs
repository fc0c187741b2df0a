//! # fileseal
//!
//! A hybrid file-encryption core: a from-scratch AES block cipher operated
//! in a per-block-independent mode with PKCS#7 padding, and an RSA engine
//! built on probabilistic prime generation, used to wrap the per-file
//! symmetric key under a recipient's public key.
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`api`]: trait definitions, error types, and secret byte containers
//! - [`params`]: algorithm constants
//! - [`algorithms`]: the AES block cipher, padding, and the RSA engine
//! - [`hybrid`]: the four-operation orchestration surface
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use fileseal::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let key = AesKey::generate(&mut OsRng, KeySize::Aes128);
//! let keypair = RsaKeyPair::generate(&mut OsRng, 1024)?;
//!
//! let ciphertext = hybrid::encrypt(b"attack at dawn", &key)?;
//! let wrapped = hybrid::wrap_key(&key, keypair.public_key())?;
//!
//! let recovered_key = hybrid::unwrap_key(&wrapped, keypair.private_key())?;
//! let plaintext = hybrid::decrypt(&ciphertext, &recovered_key)?;
//! ```

#![forbid(unsafe_code)]

pub use fileseal_algorithms as algorithms;
pub use fileseal_api as api;
pub use fileseal_hybrid as hybrid;
pub use fileseal_params as params;

/// Common imports for fileseal users
pub mod prelude {
    pub use fileseal_algorithms::block::aes::{Aes128, Aes192, Aes256, AesKey, KeySize};
    pub use fileseal_algorithms::block::modes::Ecb;
    pub use fileseal_algorithms::block::padding::pkcs7;
    pub use fileseal_algorithms::rsa::{Rsa, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
    pub use fileseal_api::traits::{BlockCipher, CipherAlgorithm, KeyWrap};
    pub use fileseal_api::types::SecretBytes;
    pub use fileseal_api::{Error, Result};
}
