//! Hybrid encryption orchestration
//!
//! Composes the two engines of the algorithms crate into the four
//! operations the library exists for:
//!
//! - [`encrypt`] / [`decrypt`]: bulk data under an AES key of any
//!   supported size, PKCS#7-padded and processed block by block.
//! - [`wrap_key`] / [`unwrap_key`]: the AES key itself protected under
//!   an RSA public key, so the symmetric key can travel with the
//!   ciphertext.
//!
//! Key text parsing ([`parse_key_text`]) and the base64 wrapped-key
//! artifact codec ([`encode_wrapped_key`] / [`decode_wrapped_key`]) sit
//! at the edges for callers that deal in files rather than byte slices.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod artifact;
pub mod error;
pub mod key;

pub use artifact::{decode_wrapped_key, encode_wrapped_key};
pub use error::{Error, Result};
pub use key::parse_key_text;

use algorithms::block::aes::{Aes128, Aes192, Aes256, AesKey};
use algorithms::block::modes::Ecb;
use algorithms::block::padding::pkcs7;
use algorithms::rsa::{Rsa, RsaPrivateKey, RsaPublicKey};
use api::traits::{BlockCipher, KeyWrap};
use params::asymmetric::WRAP_TARGET_KEY_LEN;
use params::symmetric::AES_BLOCK_SIZE;
use zeroize::Zeroize;

/// Encrypt arbitrary bytes under an AES key.
///
/// The plaintext is PKCS#7-padded to the block size first, so the
/// ciphertext is always at least one block and never empty.
pub fn encrypt(plaintext: &[u8], key: &AesKey) -> Result<Vec<u8>> {
    let mut padded = pkcs7::pad(plaintext, AES_BLOCK_SIZE);
    let ciphertext = match key {
        AesKey::Aes128(k) => Ecb::new(Aes128::new(k)).encrypt(&padded),
        AesKey::Aes192(k) => Ecb::new(Aes192::new(k)).encrypt(&padded),
        AesKey::Aes256(k) => Ecb::new(Aes256::new(k)).encrypt(&padded),
    };
    padded.zeroize();
    Ok(ciphertext?)
}

/// Decrypt bytes produced by [`encrypt`] with the same key.
///
/// Fails when the ciphertext is not a whole number of blocks or when
/// the recovered padding is invalid, which is the observable symptom of
/// a wrong key.
pub fn decrypt(ciphertext: &[u8], key: &AesKey) -> Result<Vec<u8>> {
    let mut padded = match key {
        AesKey::Aes128(k) => Ecb::new(Aes128::new(k)).decrypt(ciphertext),
        AesKey::Aes192(k) => Ecb::new(Aes192::new(k)).decrypt(ciphertext),
        AesKey::Aes256(k) => Ecb::new(Aes256::new(k)).decrypt(ciphertext),
    }?;
    let plaintext = pkcs7::unpad(&padded, AES_BLOCK_SIZE);
    padded.zeroize();
    Ok(plaintext?)
}

/// Wrap an AES key under an RSA public key.
///
/// The key bytes are interpreted as one big-endian integer and pushed
/// through the RSA transform; the modulus must therefore be wider than
/// the key. Use [`encode_wrapped_key`] to turn the result into a text
/// artifact.
pub fn wrap_key(key: &AesKey, public_key: &RsaPublicKey) -> Result<Vec<u8>> {
    Ok(Rsa::wrap_key(public_key, key.as_bytes())?)
}

/// Unwrap a wrapped AES key with the RSA private key.
///
/// Recovers the fixed 16-byte key the deployment format agreed on; see
/// [`unwrap_key_to_len`] for the other key sizes.
pub fn unwrap_key(wrapped: &[u8], private_key: &RsaPrivateKey) -> Result<AesKey> {
    unwrap_key_to_len(wrapped, private_key, WRAP_TARGET_KEY_LEN)
}

/// Unwrap a wrapped AES key, restoring it to exactly `target_len` bytes.
///
/// The integer form of a key does not preserve leading zero bytes, so
/// the caller must know the original length; it is not recoverable from
/// the wrapped value. `target_len` must be a supported AES key length.
pub fn unwrap_key_to_len(
    wrapped: &[u8],
    private_key: &RsaPrivateKey,
    target_len: usize,
) -> Result<AesKey> {
    let mut bytes = Rsa::unwrap_key(private_key, wrapped, target_len)?;
    let key = AesKey::from_bytes(&bytes);
    bytes.zeroize();
    Ok(key?)
}
