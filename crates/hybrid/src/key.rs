//! Flexible key text parsing
//!
//! Key material arrives as text from files and command lines in three
//! historical encodings. They are tried in a fixed order (base64, then
//! hex, then the raw bytes of the text itself) and the first decoding
//! that yields a supported AES key length wins. The order matters: a
//! 32-character hex string is also valid base64, but decodes there to
//! 24 bytes, so it is claimed by the base64 branch. Callers who need an
//! unambiguous encoding should use 64-character hex or raw bytes.

use algorithms::block::aes::AesKey;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Parse key text as base64, hex, or raw bytes, in that order.
///
/// Each decoding is accepted only when it produces 16, 24, or 32 bytes;
/// otherwise the next one is tried.
pub fn parse_key_text(text: &str) -> Result<AesKey> {
    if let Ok(mut bytes) = STANDARD.decode(text) {
        let parsed = AesKey::from_bytes(&bytes);
        bytes.zeroize();
        if let Ok(key) = parsed {
            return Ok(key);
        }
    }

    if let Ok(mut bytes) = hex::decode(text) {
        let parsed = AesKey::from_bytes(&bytes);
        bytes.zeroize();
        if let Ok(key) = parsed {
            return Ok(key);
        }
    }

    AesKey::from_bytes(text.as_bytes()).map_err(|_| {
        Error::InvalidKeyText("not base64, hex, or raw bytes of a 16/24/32-byte key")
    })
}
