//! Trait definitions for the fileseal primitives
//!
//! Two seams exist between the core and its callers: block ciphers (bulk
//! data) and key wrapping (protecting a small symmetric key under an
//! asymmetric public key). Both are defined here so the orchestration
//! layer depends only on this crate.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key.
    ///
    /// Key expansion happens once here; the schedule is reused for every
    /// block transformed through this instance.
    fn new(key: &Self::Key) -> Self
    where
        Self: Sized;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}

/// Trait for key-wrapping schemes.
///
/// Key wrapping encrypts a small fixed-size symmetric key under an
/// asymmetric public key; it is never used for bulk data.
pub trait KeyWrap {
    /// Public key type
    type PublicKey: Clone;

    /// Private key type
    type PrivateKey: Clone;

    /// Keypair type holding both halves
    type KeyPair: Clone;

    /// Returns the scheme name
    fn name() -> &'static str;

    /// Generate a new keypair with the requested modulus width.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R, modulus_bits: u64) -> Result<Self::KeyPair>;

    /// Extract the public half from a keypair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the private half from a keypair
    fn private_key(keypair: &Self::KeyPair) -> Self::PrivateKey;

    /// Wrap raw symmetric key bytes under the recipient's public key
    fn wrap_key(public_key: &Self::PublicKey, key_bytes: &[u8]) -> Result<Vec<u8>>;

    /// Unwrap previously wrapped bytes, recovering exactly `target_len`
    /// key bytes (leading zero bytes are not preserved by the integer
    /// representation and must be restored).
    fn unwrap_key(
        private_key: &Self::PrivateKey,
        wrapped: &[u8],
        target_len: usize,
    ) -> Result<Vec<u8>>;
}
