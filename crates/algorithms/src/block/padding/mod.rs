//! PKCS#7 byte padding
//!
//! The pad value equals the pad length, so removal is unambiguous. A full
//! block of padding is appended when the input is already block-aligned.
//! Unpadding validates every pad byte and fails loudly: a bad pad means
//! either the wrong key or a corrupted ciphertext, and returning a
//! truncated plaintext instead would mask both.

use api::error::{validate, Error, Result};


/// PKCS#7 padding over a fixed block size
pub mod pkcs7 {
    use super::*;

    /// Pad `data` up to the next multiple of `block_size`.
    ///
    /// Always appends at least one byte and at most `block_size` bytes,
    /// each equal to the number of bytes appended.
    pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
        debug_assert!(block_size >= 1 && block_size <= 255);
        let pad_len = block_size - data.len() % block_size;
        let mut padded = Vec::with_capacity(data.len() + pad_len);
        padded.extend_from_slice(data);
        padded.resize(data.len() + pad_len, pad_len as u8);
        padded
    }

    /// Strip and validate PKCS#7 padding.
    ///
    /// Rejects empty input, input that is not a whole number of blocks,
    /// a pad value outside `[1, block_size]`, and pad bytes that do not
    /// all equal the pad value.
    pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Err(Error::InvalidPadding {
                context: "PKCS#7 unpad",
            });
        }
        validate::multiple_of("PKCS#7 padded data", data.len(), block_size)?;

        let pad_len = data[data.len() - 1] as usize;
        if pad_len == 0 || pad_len > block_size {
            return Err(Error::InvalidPadding {
                context: "PKCS#7 unpad",
            });
        }
        let (plaintext, padding) = data.split_at(data.len() - pad_len);
        if padding.iter().any(|&byte| byte as usize != pad_len) {
            return Err(Error::InvalidPadding {
                context: "PKCS#7 unpad",
            });
        }
        Ok(plaintext.to_vec())
    }
}
