//! Electronic Codebook (ECB) mode implementation
//!
//! ECB applies the block cipher to each block independently with no
//! chaining and no IV. Identical plaintext blocks under the same key
//! produce identical ciphertext blocks, which leaks data patterns; the
//! mode is kept here for the payload format it serves, where every
//! message is freshly keyed.
//!
//! The input must already be a whole number of blocks; apply
//! [`pkcs7`](crate::block::padding::pkcs7) padding first.

use zeroize::{Zeroize, ZeroizeOnDrop};

use api::error::{validate, Result};
use api::traits::BlockCipher;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(test)]
mod tests;

/// ECB mode over any [`BlockCipher`]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Creates a new ECB mode instance wrapping the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts a message, one independent block at a time.
    ///
    /// The plaintext length must be a multiple of the block size;
    /// padding is the caller's responsibility.
    #[cfg(not(feature = "parallel"))]
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("ECB plaintext", plaintext.len(), B::block_size())?;

        let mut ciphertext = plaintext.to_vec();
        for block in ciphertext.chunks_mut(B::block_size()) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(ciphertext)
    }

    /// Decrypts a message, one independent block at a time.
    ///
    /// The ciphertext length must be a multiple of the block size.
    #[cfg(not(feature = "parallel"))]
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("ECB ciphertext", ciphertext.len(), B::block_size())?;

        let mut plaintext = ciphertext.to_vec();
        for block in plaintext.chunks_mut(B::block_size()) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(plaintext)
    }
}

// Blocks are independent in ECB, so they can be transformed in parallel
// with the shared key schedule.
#[cfg(feature = "parallel")]
impl<B: BlockCipher + Zeroize + ZeroizeOnDrop + Sync> Ecb<B> {
    /// Encrypts a message, blocks processed in parallel.
    ///
    /// The plaintext length must be a multiple of the block size;
    /// padding is the caller's responsibility.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("ECB plaintext", plaintext.len(), B::block_size())?;

        let mut ciphertext = plaintext.to_vec();
        ciphertext
            .par_chunks_mut(B::block_size())
            .try_for_each(|block| self.cipher.encrypt_block(block))?;
        Ok(ciphertext)
    }

    /// Decrypts a message, blocks processed in parallel.
    ///
    /// The ciphertext length must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("ECB ciphertext", ciphertext.len(), B::block_size())?;

        let mut plaintext = ciphertext.to_vec();
        plaintext
            .par_chunks_mut(B::block_size())
            .try_for_each(|block| self.cipher.decrypt_block(block))?;
        Ok(plaintext)
    }
}
