//! Wrapped-key artifact codec
//!
//! A wrapped key travels next to the ciphertext as a small base64 text
//! artifact (a sidecar file or a field in a larger envelope). Only the
//! encoding lives here; the wrapping itself is an RSA concern.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Encode wrapped-key bytes as a base64 artifact
pub fn encode_wrapped_key(wrapped: &[u8]) -> String {
    STANDARD.encode(wrapped)
}

/// Decode a base64 wrapped-key artifact.
///
/// Surrounding whitespace is tolerated; anything else that fails to
/// decode is rejected.
pub fn decode_wrapped_key(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|_| Error::InvalidArtifact("wrapped key is not valid base64"))
}
